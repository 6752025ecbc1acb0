//! Prints per-channel statistics for an 8-bit RGB TIFF.
//!
//! cargo run --example inspect_tiff -- out.tif

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: inspect_tiff <image.tif>"))?;

    let mut decoder = tiff::decoder::Decoder::new(std::fs::File::open(&path)?)?;
    let (width, height) = decoder.dimensions()?;
    let colortype = decoder.colortype()?;

    println!("Image: {}x{} pixels, {:?}", width, height, colortype);

    let data = match decoder.read_image()? {
        tiff::decoder::DecodingResult::U8(data) if colortype == tiff::ColorType::RGB(8) => data,
        _ => anyhow::bail!("{} is not an 8-bit RGB image", path),
    };

    let mut histograms = [[0usize; 256]; 3];
    for pixel in data.chunks_exact(3) {
        for (channel, &value) in pixel.iter().enumerate() {
            histograms[channel][value as usize] += 1;
        }
    }

    let pixels = (width as usize * height as usize).max(1);
    for (name, hist) in ["R", "G", "B"].iter().zip(&histograms) {
        let min = hist.iter().position(|&n| n > 0).unwrap_or(0);
        let max = hist.iter().rposition(|&n| n > 0).unwrap_or(0);
        let sum: usize = hist.iter().enumerate().map(|(v, &n)| v * n).sum();
        println!(
            "{}: min={:3} max={:3} mean={:7.2} zero={:5.1}% saturated={:5.1}%",
            name,
            min,
            max,
            sum as f64 / pixels as f64,
            hist[0] as f64 * 100.0 / pixels as f64,
            hist[255] as f64 * 100.0 / pixels as f64,
        );
    }

    Ok(())
}
