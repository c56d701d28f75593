use std::fmt::Write as _;

use statcalc_stats::{StatValue, Statistic, Summary};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct CalcArg {
    /// Comma-separated integers, e.g. "10, 20, 30"
    #[clap(allow_hyphen_values = true)]
    pub(crate) input: String,
    /// Print the result as JSON
    #[clap(long)]
    json: bool,
}

#[derive(Debug, serde::Serialize)]
struct CalcOutput {
    statistic: Statistic,
    value: StatValue,
}

pub(crate) fn run(statistic: Statistic, arg: &CalcArg) -> anyhow::Result<()> {
    let CalcArg { input, json } = arg;

    let value = statistic.compute(input)?;
    log::info!("{statistic} of {input:?} = {value}");

    if *json {
        let output = CalcOutput { statistic, value };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{statistic}: {value}");
    }
    Ok(())
}

pub(crate) fn run_summary(arg: &CalcArg) -> anyhow::Result<()> {
    let CalcArg { input, json } = arg;

    let summary = Summary::from_input(input)?;
    if *json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", format_summary(&summary));
    }
    Ok(())
}

fn format_summary(summary: &Summary) -> String {
    let std_dev = summary
        .std_dev
        .map_or_else(|| "n/a".to_owned(), |sd| StatValue::Float(sd).to_string());

    let mut out = String::new();
    let rows = [
        (
            Statistic::SampleSize.to_string(),
            summary.sample_size.to_string(),
        ),
        (
            Statistic::Mean.to_string(),
            StatValue::Float(summary.mean).to_string(),
        ),
        (Statistic::StandardDeviation.to_string(), std_dev),
        (
            Statistic::Median.to_string(),
            StatValue::Float(summary.median).to_string(),
        ),
        ("Min".to_owned(), summary.min.to_string()),
        ("Max".to_owned(), summary.max.to_string()),
    ];
    for (label, value) in rows {
        _ = writeln!(out, "{label:<20}{value}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_summary() {
        let summary = Summary::from_input("10, 20, 30, 40, 50").unwrap();
        assert_eq!(
            format_summary(&summary),
            "Sample Size         5\n\
             Mean                30.0\n\
             Standard Deviation  15.81\n\
             Median              30.0\n\
             Min                 10\n\
             Max                 50\n"
        );
    }

    #[test]
    fn test_format_summary_single_value() {
        let summary = Summary::from_input("7").unwrap();
        assert!(format_summary(&summary).contains("Standard Deviation  n/a\n"));
    }

    #[test]
    fn test_json_output_shape() {
        let output = CalcOutput {
            statistic: Statistic::StandardDeviation,
            value: Statistic::StandardDeviation.compute("1,2").unwrap(),
        };
        assert_eq!(
            serde_json::to_string(&output).unwrap(),
            r#"{"statistic":"StandardDeviation","value":0.71}"#
        );
    }
}
