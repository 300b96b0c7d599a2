use std::io::{self, BufWriter, Write};

use fs_err as fs;

use crate::data::{Job, ResultRow};
use crate::options::PackOptions;

pub fn pack(options: PackOptions) -> anyhow::Result<()> {
    let job = Job::read_from_file(&options.job)?;

    let bin_size = job.bin_size(options.bin_size)?;
    let heuristic = options.heuristic.or(job.heuristic).unwrap_or_default();
    let (widths, heights) = job.dimensions()?;

    log::debug!(
        "Packing {} rectangles from {} into {}x{} using {}",
        widths.len(),
        job.file_path.display(),
        bin_size.0,
        bin_size.1,
        heuristic
    );

    let output = skypack::pack_dimensions(bin_size, &widths, &heights, heuristic.into())?;

    log::info!(
        "Placed {} of {} rectangles, {:.1}% of the bin is used",
        output.placed().count(),
        output.items().len(),
        output.occupancy() * 100.0
    );

    let rows: Vec<ResultRow> = output.items().iter().map(ResultRow::from).collect();

    match &options.output {
        Some(path) => {
            if let Some(folder) = path.parent() {
                if !folder.as_os_str().is_empty() {
                    fs::create_dir_all(folder)?;
                }
            }

            let mut file = BufWriter::new(fs::File::create(path)?);
            serde_json::to_writer_pretty(&mut file, &rows)?;
            file.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &rows)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::options::{BinSize, HeuristicOption};

    fn write_job(folder: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = folder.path().join("job.toml");
        fs::write(&path, contents).unwrap();
        path
    }

    fn read_rows(path: &std::path::Path) -> Vec<ResultRow> {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn writes_rows_in_input_order() {
        let folder = tempfile::tempdir().unwrap();
        let job = write_job(
            &folder,
            "bin-size = [4, 4]\nwidths = [4, 4, 4]\nheights = [2, 2, 1]\n",
        );
        let output = folder.path().join("out/results.json");

        pack(PackOptions {
            job,
            bin_size: None,
            heuristic: None,
            output: Some(output.clone()),
        })
        .unwrap();

        let rows = read_rows(&output);
        assert_eq!(rows.len(), 3);
        assert_eq!((rows[0].packed, rows[0].x, rows[0].y), (true, Some(0), Some(0)));
        assert_eq!((rows[1].packed, rows[1].x, rows[1].y), (true, Some(0), Some(2)));
        assert_eq!((rows[2].packed, rows[2].x, rows[2].y), (false, None, None));
    }

    #[test]
    fn options_override_job() {
        let folder = tempfile::tempdir().unwrap();
        let job = write_job(&folder, "bin-size = [1, 1]\nwidths = [8]\nheights = [8]\n");
        let output = folder.path().join("results.json");

        pack(PackOptions {
            job,
            bin_size: Some(BinSize {
                width: 8,
                height: 8,
            }),
            heuristic: Some(HeuristicOption::BottomLeft),
            output: Some(output.clone()),
        })
        .unwrap();

        assert!(read_rows(&output)[0].packed);
    }

    #[test]
    fn invalid_bin_writes_nothing() {
        let folder = tempfile::tempdir().unwrap();
        let job = write_job(&folder, "bin-size = [0, 10]\nwidths = [1]\nheights = [1]\n");
        let output = folder.path().join("results.json");

        let result = pack(PackOptions {
            job,
            bin_size: None,
            heuristic: None,
            output: Some(output.clone()),
        });

        let err = result.unwrap_err();
        let packing_error = err.downcast_ref::<skypack::Error>().unwrap();
        assert!(packing_error.is_invalid_argument());
        assert!(!output.exists());
    }

    #[test]
    fn mismatched_lists() {
        let folder = tempfile::tempdir().unwrap();
        let job = write_job(&folder, "bin-size = [10, 10]\nwidths = [1, 2]\nheights = [1]\n");

        let result = pack(PackOptions {
            job,
            bin_size: None,
            heuristic: None,
            output: None,
        });

        match result.unwrap_err().downcast_ref::<skypack::Error>() {
            Some(skypack::Error::MismatchedLengths { widths: 2, heights: 1 }) => {}
            other => panic!("expected MismatchedLengths, got {:?}", other),
        }
    }
}
