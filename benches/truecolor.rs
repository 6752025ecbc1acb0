use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::io::Cursor;
use truecolor_tiff::image_pipeline::{
    Band, BandBuffer, ByteOrder, ConversionConfig, Dimensions, StretchMode, Thresholds, TrueColorPipeline,
};

fn generate_mock_band(width: usize, height: usize, offset: usize) -> Vec<i16> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            data.push(((x * 7 + y * 13 + offset) % 10000) as i16);
        }
    }
    data
}

fn to_bytes(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

fn config(mode: StretchMode) -> ConversionConfig {
    ConversionConfig::builder()
        .mode(mode)
        .uniform_thresholds(Thresholds::MOD09_BROWSE)
        .byte_order(ByteOrder::Little)
        .build()
}

fn benchmark_conversion_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let bands: Vec<Vec<u8>> = (0..3)
            .map(|i| to_bytes(&generate_mock_band(width, height, i * 1000)))
            .collect();
        let dims = Dimensions::new(height, width).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(label), &bands, |b, bands| {
            let pipeline = TrueColorPipeline::new(config(StretchMode::Log)).unwrap();

            b.iter(|| {
                let mut blue = Cursor::new(black_box(&bands[0]));
                let mut green = Cursor::new(black_box(&bands[1]));
                let mut red = Cursor::new(black_box(&bands[2]));
                let mut output = Cursor::new(Vec::new());
                let _ = pipeline.convert(dims, [&mut blue, &mut green, &mut red], &mut output);
            });
        });
    }

    group.finish();
}

fn benchmark_stretch_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("stretch_modes");
    let (width, height) = (500, 500);
    let dims = Dimensions::new(height, width).unwrap();
    let bands = [
        BandBuffer::new(Band::Blue, generate_mock_band(width, height, 0)),
        BandBuffer::new(Band::Green, generate_mock_band(width, height, 1000)),
        BandBuffer::new(Band::Red, generate_mock_band(width, height, 2000)),
    ];

    for (mode, label) in [(StretchMode::Linear, "linear"), (StretchMode::Log, "log")] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &bands, |b, bands| {
            let pipeline = TrueColorPipeline::new(config(mode)).unwrap();
            b.iter(|| pipeline.render(dims, black_box(bands)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_conversion_sizes, benchmark_stretch_modes);
criterion_main!(benches);
