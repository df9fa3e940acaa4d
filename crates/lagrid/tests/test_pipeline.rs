use std::fs;

use lagrid::grid::{Grid, GridSize};
use lagrid::io::png::write_grid_png;
use lagrid::io::txt::{read_grid_txt, write_grid_txt};
use lagrid::resample::{super_sample, FinishPolicy, SuperSampleMethod, WindowPolicy};

#[test]
fn upsample_pipeline_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempfile::tempdir()?;

    // a small square grid on disk
    let src_path = tmp_dir.path().join("image.txt");
    fs::write(&src_path, "2 2\n0.0 1.0\n1.0 0.0\n")?;

    let src: Grid<f64> = read_grid_txt(&src_path)?;
    assert_eq!(src.size().width, 2);
    assert_eq!(src.size().height, 2);

    // upsample 8x and write both formats back
    let mut dst = Grid::from_size_val(
        GridSize {
            width: 16,
            height: 16,
        },
        0.0,
    )?;
    super_sample(
        &src,
        &mut dst,
        2,
        SuperSampleMethod {
            window: WindowPolicy::Sliding,
            finish: FinishPolicy::ClampAtEnd,
        },
    )?;

    assert!(dst.as_slice().iter().all(|v| (0.0..=1.0).contains(v)));

    let txt_path = tmp_dir.path().join("output_2.txt");
    let png_path = tmp_dir.path().join("output_2.png");
    write_grid_txt(&txt_path, &dst)?;
    write_grid_png(&png_path, &dst)?;
    assert!(txt_path.exists());
    assert!(png_path.exists());

    // the written grid reads back with the same shape and values
    let back: Grid<f64> = read_grid_txt(&txt_path)?;
    assert_eq!(back.size(), dst.size());
    for (a, b) in back.as_slice().iter().zip(dst.as_slice().iter()) {
        assert!((a - b).abs() < 1e-6);
    }

    Ok(())
}

#[test]
fn sweep_multiple_block_sizes() -> Result<(), Box<dyn std::error::Error>> {
    let src = Grid::new(
        GridSize {
            width: 4,
            height: 4,
        },
        vec![
            0.0f64, 0.2, 0.4, 0.6, 0.2, 0.4, 0.6, 0.8, 0.4, 0.6, 0.8, 1.0, 0.6, 0.8, 1.0, 0.8,
        ],
    )?;

    for k in 1..=8 {
        let mut dst = Grid::from_size_val(
            GridSize {
                width: 32,
                height: 32,
            },
            0.0,
        )?;
        super_sample(&src, &mut dst, k, SuperSampleMethod::default())?;
        assert!(dst.as_slice().iter().all(|v| (0.0..=1.0).contains(v)));
    }

    Ok(())
}
