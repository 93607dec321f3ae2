use std::io::Write;

use anyhow::{Context, Result};
use log::debug;

use crate::config::AmplifyConfig;
use crate::data::amplify::amplify;
use crate::data::loader::load_csv;
use crate::data::model::Dataset;
use crate::data::writer::save_csv;

// ---------------------------------------------------------------------------
// One run: load → report → amplify → report → save
// ---------------------------------------------------------------------------

/// Execute a full run. The two size reports go to `report`, one integer per
/// line; everything else is logged.
pub fn run<W: Write>(config: &AmplifyConfig, report: &mut W) -> Result<()> {
    let dataset = load_csv(&config.input).context("loading input dataset")?;
    log_preview(&dataset);
    report_size(&dataset, report)?;

    let amplified = amplify(&dataset, config.factor).context("amplifying dataset")?;
    report_size(&amplified, report)?;

    save_csv(&amplified, &config.output).context("saving amplified dataset")?;
    Ok(())
}

fn report_size<W: Write>(dataset: &Dataset, report: &mut W) -> Result<()> {
    writeln!(report, "{}", dataset.memory_size()).context("writing size report")
}

fn log_preview(dataset: &Dataset) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    match dataset.preview(5) {
        Ok(table) => debug!("first rows:\n{table}"),
        Err(e) => debug!("cannot render preview: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;
    use std::path::Path;

    use super::*;
    use crate::error::DatasetError;

    fn config(dir: &Path, input: &str, factor: usize) -> AmplifyConfig {
        let input_path = dir.join("in.csv");
        std::fs::write(&input_path, input).unwrap();
        AmplifyConfig {
            input: input_path,
            output: dir.join("out.csv"),
            factor: NonZeroUsize::new(factor).unwrap(),
        }
    }

    #[test]
    fn two_rows_three_copies() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(
            dir.path(),
            "length,diameter,height,rings\n0.5,0.3,0.1,7\n0.4,0.2,0.1,5\n",
            3,
        );

        let mut report = Vec::new();
        run(&config, &mut report).unwrap();

        let written = std::fs::read_to_string(&config.output).unwrap();
        assert_eq!(
            written,
            ",length,diameter,height,rings\n\
             0,0.5,0.3,0.1,7\n\
             1,0.4,0.2,0.1,5\n\
             2,0.5,0.3,0.1,7\n\
             3,0.4,0.2,0.1,5\n\
             4,0.5,0.3,0.1,7\n\
             5,0.4,0.2,0.1,5\n"
        );
    }

    #[test]
    fn date_and_boolean_cells_are_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(
            dir.path(),
            "id,day,when,flag\n\
             0,2021-01-01,2021-01-01 10:00:00,True\n\
             1,2021-02-03,2021-02-03 04:05:06,false\n",
            2,
        );

        run(&config, &mut Vec::new()).unwrap();

        let written = std::fs::read_to_string(&config.output).unwrap();
        assert_eq!(
            written,
            ",id,day,when,flag\n\
             0,0,2021-01-01,2021-01-01 10:00:00,True\n\
             1,1,2021-02-03,2021-02-03 04:05:06,false\n\
             2,0,2021-01-01,2021-01-01 10:00:00,True\n\
             3,1,2021-02-03,2021-02-03 04:05:06,false\n"
        );
    }

    #[test]
    fn reports_two_sizes_the_second_larger() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), "sex,rings\nM,15\nF,9\nI,7\n", 700);

        let mut report = Vec::new();
        run(&config, &mut report).unwrap();

        let text = String::from_utf8(report).unwrap();
        let sizes: Vec<usize> = text.lines().map(|l| l.parse().unwrap()).collect();
        assert_eq!(sizes.len(), 2);
        assert!(sizes[1] > sizes[0]);
    }

    #[test]
    fn reruns_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(
            dir.path(),
            "sex,length,rings\nM,0.455,15\nF,,9\nI,0.33,\n",
            50,
        );

        run(&config, &mut Vec::new()).unwrap();
        let first = std::fs::read(&config.output).unwrap();
        run(&config, &mut Vec::new()).unwrap();
        let second = std::fs::read(&config.output).unwrap();
        assert_eq!(first, second);
        assert_eq!(String::from_utf8(first).unwrap().lines().count(), 1 + 3 * 50);
    }

    #[test]
    fn header_only_input_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), "length,rings\n", 700);

        run(&config, &mut Vec::new()).unwrap();
        assert_eq!(
            std::fs::read_to_string(&config.output).unwrap(),
            ",length,rings\n"
        );
    }

    #[test]
    fn missing_input_aborts_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let config = AmplifyConfig {
            input: dir.path().join("absent.csv"),
            output: dir.path().join("out.csv"),
            factor: NonZeroUsize::new(2).unwrap(),
        };

        let mut report = Vec::new();
        let err = run(&config, &mut report).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DatasetError>(),
            Some(DatasetError::Input { .. })
        ));
        assert!(report.is_empty());
        assert!(!config.output.exists());
    }

    #[test]
    fn unwritable_output_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(dir.path(), "a\n1\n", 2);
        config.output = dir.path().join("no-such-dir").join("out.csv");

        let err = run(&config, &mut Vec::new()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DatasetError>(),
            Some(DatasetError::Output { .. })
        ));
    }
}
