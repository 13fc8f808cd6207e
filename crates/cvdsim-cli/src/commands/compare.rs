//! Golden image comparison command

use anyhow::{Result, bail};
use cvdsim_core::compare::compare_rgba;
use image::RgbaImage;

use crate::CompareArgs;

const CHANNEL_NAMES: [&str; 4] = ["R", "G", "B", "A"];

pub fn run(args: CompareArgs) -> Result<()> {
    let expected = super::load_image(&args.expected)?;
    let actual = super::load_image(&args.actual)?;

    if expected.dimensions() != actual.dimensions() {
        let (ew, eh) = expected.dimensions();
        let (aw, ah) = actual.dimensions();
        bail!("Image dimensions don't match: {ew}x{eh} vs {aw}x{ah}");
    }

    if let Some(ref output) = args.diff_output {
        super::save_image(output, &difference_image(&expected, &actual))?;
        tracing::info!("difference image saved to {}", output.display());
    }

    let width = expected.width() as usize;
    let comparison = compare_rgba(expected.as_raw(), actual.as_raw(), width, args.tolerance)?;

    println!("Comparing {} vs {}", args.expected.display(), args.actual.display());
    println!("  Max difference:    {}", comparison.max_diff);
    println!("  Channels differ:   {}", comparison.mismatched);

    if let Some(m) = comparison.first_mismatch {
        bail!(
            "FAIL: ({}, {})[{}] expected {} got {} (diff {} > tolerance {})",
            m.x,
            m.y,
            CHANNEL_NAMES[m.channel],
            m.expected,
            m.actual,
            m.diff(),
            args.tolerance
        );
    }

    println!("PASS");
    Ok(())
}

/// Per-channel absolute difference; alpha is forced opaque so the image is viewable.
fn difference_image(expected: &RgbaImage, actual: &RgbaImage) -> RgbaImage {
    RgbaImage::from_fn(expected.width(), expected.height(), |x, y| {
        let e = expected.get_pixel(x, y).0;
        let a = actual.get_pixel(x, y).0;
        image::Rgba([
            e[0].abs_diff(a[0]),
            e[1].abs_diff(a[1]),
            e[2].abs_diff(a[2]),
            255,
        ])
    })
}
