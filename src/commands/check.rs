use std::convert::TryFrom;

use anyhow::{bail, Context};
use fs_err as fs;
use skypack::OutputItem;

use crate::data::{Job, ResultRow};
use crate::options::CheckOptions;

pub fn check(options: CheckOptions) -> anyhow::Result<()> {
    let job = Job::read_from_file(&options.job)?;
    let (width, height) = job.bin_size(options.bin_size)?;
    let (widths, heights) = job.dimensions()?;

    if widths.len() != heights.len() {
        return Err(skypack::Error::MismatchedLengths {
            widths: widths.len(),
            heights: heights.len(),
        }
        .into());
    }

    let bin_size = (
        u32::try_from(width).context("Bin width is out of range")?,
        u32::try_from(height).context("Bin height is out of range")?,
    );

    let contents = fs::read_to_string(&options.results)?;
    let rows: Vec<ResultRow> = serde_json::from_str(&contents)
        .with_context(|| format!("Could not parse {}", options.results.display()))?;

    if rows.len() != widths.len() {
        bail!(
            "{} has {} rows, but the job has {} rectangles",
            options.results.display(),
            rows.len(),
            widths.len()
        );
    }

    for (index, row) in rows.iter().enumerate() {
        let expected = (widths[index], heights[index]);
        if row.idx != index as u64 || (i64::from(row.w), i64::from(row.h)) != expected {
            bail!(
                "Row {} is {}x{} with idx {}, but rectangle {} in the job is {}x{}",
                index,
                row.w,
                row.h,
                row.idx,
                index,
                expected.0,
                expected.1
            );
        }
    }

    let mut items: Vec<OutputItem> = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let item = row
            .to_output_item()
            .with_context(|| format!("Row {} of {}", index, options.results.display()))?;
        items.push(item);
    }

    skypack::verify::verify(bin_size, &items)?;

    let placed = items.iter().filter(|item| item.is_placed()).count();
    log::info!("{} of {} rectangles placed", placed, items.len());
    println!("ok");

    Ok(())
}
