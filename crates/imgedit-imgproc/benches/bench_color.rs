use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use imgedit_image::Image;
use imgedit_imgproc::{color, enhance};

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("Color");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_size = [*width, *height].into();
        let image = Image::<u8, 3>::new(image_size, vec![128u8; width * height * 3]).unwrap();
        let gray = Image::<u8, 1>::from_size_val(image_size, 0).unwrap();
        let rgb = Image::<u8, 3>::from_size_val(image_size, 0).unwrap();

        group.bench_with_input(
            BenchmarkId::new("gray_from_bgr_u8", &parameter_string),
            &(&image, &gray),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| color::gray_from_bgr_u8(black_box(src), black_box(&mut dst)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("hsv_roundtrip_u8", &parameter_string),
            &(&image, &rgb),
            |b, i| {
                let (src, mut hsv) = (i.0, i.1.clone());
                let mut dst = i.1.clone();
                b.iter(|| {
                    color::hsv_from_bgr_u8(black_box(src), black_box(&mut hsv))?;
                    color::rgb_from_hsv_u8(black_box(&hsv), black_box(&mut dst))
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("adjust_gamma_u8", &parameter_string),
            &(&image, &rgb),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| enhance::adjust_gamma_u8(black_box(src), black_box(2.2), black_box(&mut dst)))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_color);
criterion_main!(benches);
