use crate::{dataset::Dataset, error::StatsError};

/// All four statistics of a dataset, computed together.
///
/// `std_dev` is `None` when the dataset holds a single value.
///
/// # Examples
///
/// ```
/// use statcalc_stats::{Dataset, Summary};
///
/// let summary = Summary::from_dataset(&Dataset::parse("4").unwrap()).unwrap();
/// assert_eq!(summary.mean, 4.0);
/// assert_eq!(summary.std_dev, None);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Summary {
    pub mean: f64,
    pub std_dev: Option<f64>,
    pub median: f64,
    pub sample_size: usize,
    pub min: i32,
    pub max: i32,
}

impl Summary {
    /// Computes the summary of a non-empty dataset.
    ///
    /// # Errors
    ///
    /// [`StatsError::UndefinedOperation`] if the dataset is empty.
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, StatsError> {
        let mean = dataset.mean()?;
        let median = dataset.median()?;
        let std_dev = match dataset.std_dev() {
            Ok(sd) => Some(sd),
            Err(StatsError::InsufficientData { .. }) => None,
            Err(e) => return Err(e),
        };
        // non-empty is guaranteed by `mean` above
        let values = dataset.values();
        let (min, max) = (values[0], values[values.len() - 1]);

        Ok(Self {
            mean,
            std_dev,
            median,
            sample_size: dataset.sample_size(),
            min,
            max,
        })
    }

    /// Parses `input` and computes its summary.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Parse`] if `input` is not a valid integer list.
    pub fn from_input(input: &str) -> Result<Self, StatsError> {
        Self::from_dataset(&Dataset::parse(input)?)
    }
}
