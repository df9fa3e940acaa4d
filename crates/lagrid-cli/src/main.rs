use std::fs;
use std::path::PathBuf;

use argh::FromArgs;

use lagrid::grid::{Grid, GridSize};
use lagrid::io::png::write_grid_png;
use lagrid::io::txt::{read_grid_txt, write_grid_txt};
use lagrid::resample::{super_sample, FinishPolicy, SuperSampleMethod, WindowPolicy};

#[derive(FromArgs)]
/// Sweep Lagrange super-sampling block sizes over a square grid file.
struct Args {
    /// path to the input grid file
    #[argh(positional)]
    input: PathBuf,

    /// output edge length (defaults to 8x the input)
    #[argh(option, short = 's')]
    size: Option<usize>,

    /// window policy: block, overlap or sliding
    #[argh(option, short = 'w', default = "String::from(\"sliding\")")]
    window: String,

    /// finishing policy: clamp-each-step, clamp-at-end or normalize
    #[argh(option, short = 'f', default = "String::from(\"clamp-at-end\")")]
    finish: String,

    /// largest block size to sweep, starting from 1
    #[argh(option, short = 'k', default = "64")]
    max_block: usize,

    /// directory for the output grids
    #[argh(option, short = 'o', default = "PathBuf::from(\"image\")")]
    out_dir: PathBuf,

    /// skip the grayscale png export
    #[argh(switch)]
    no_png: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();
    env_logger::init();

    let window = WindowPolicy::from_name(&args.window)
        .ok_or_else(|| format!("unknown window policy `{}`", args.window))?;
    let finish = FinishPolicy::from_name(&args.finish)
        .ok_or_else(|| format!("unknown finishing policy `{}`", args.finish))?;
    let method = SuperSampleMethod { window, finish };

    let src: Grid<f64> = read_grid_txt(&args.input)?;
    if src.is_empty() {
        return Err(format!("unable to read a grid from {}", args.input.display()).into());
    }
    if src.width() != src.height() {
        return Err(format!(
            "input grid must be square, got {}x{}",
            src.width(),
            src.height()
        )
        .into());
    }

    let dst_size = args.size.unwrap_or(src.width() * 8);
    log::info!("upsampling {0}x{0} to {1}x{1}", src.width(), dst_size);

    fs::create_dir_all(&args.out_dir)?;

    for k in 1..=args.max_block {
        let txt_path = args.out_dir.join(format!("output_{}.txt", k));
        log::info!("generating {} ...", txt_path.display());

        let mut dst = Grid::from_size_val(
            GridSize {
                width: dst_size,
                height: dst_size,
            },
            0.0,
        )?
        .with_label(txt_path.to_string_lossy());
        super_sample(&src, &mut dst, k, method)?;

        write_grid_txt(&txt_path, &dst)?;
        if !args.no_png {
            write_grid_png(args.out_dir.join(format!("output_{}.png", k)), &dst)?;
        }
    }

    Ok(())
}
