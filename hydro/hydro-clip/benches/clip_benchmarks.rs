//! Benchmarks for waterline clipping.
//!
//! Run with: cargo bench -p hydro-clip

#![allow(missing_docs, clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nalgebra::{Point3, UnitQuaternion};

use hydro_clip::WaterlineClipper;
use hydro_types::{unit_cube, HullMesh, Pose};

/// Subdivide each hull face into 4, `levels` times.
///
/// Level 0 = 12 triangles, each level multiplies the face count by 4.
fn subdivided_cube(levels: u32) -> HullMesh {
    let mut hull = unit_cube();

    for _ in 0..levels {
        let mut vertices = hull.vertices.clone();
        let mut faces = Vec::with_capacity(hull.faces.len() * 4);

        for &[i0, i1, i2] in &hull.faces {
            let v0 = hull.vertices[i0 as usize];
            let v1 = hull.vertices[i1 as usize];
            let v2 = hull.vertices[i2 as usize];

            let m01 = Point3::from((v0.coords + v1.coords) * 0.5);
            let m12 = Point3::from((v1.coords + v2.coords) * 0.5);
            let m20 = Point3::from((v2.coords + v0.coords) * 0.5);

            let j01 = vertices.len() as u32;
            let j12 = j01 + 1;
            let j20 = j01 + 2;
            vertices.extend([m01, m12, m20]);

            faces.push([i0, j01, j20]);
            faces.push([j01, i1, j12]);
            faces.push([j20, j12, i2]);
            faces.push([j01, j12, j20]);
        }

        hull = HullMesh::from_parts(vertices, faces);
    }

    hull
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute");

    for levels in [0, 2, 4] {
        let hull = subdivided_cube(levels);
        let faces = hull.face_count();
        let mut clipper = WaterlineClipper::new(&hull).unwrap();

        // Tilted, half submerged: most faces straddle or lie below.
        let pose = Pose::from_position_rotation(
            Point3::new(0.0, -0.1, 0.0),
            UnitQuaternion::from_euler_angles(0.3, 0.0, 0.2),
        );

        group.throughput(Throughput::Elements(faces as u64));
        group.bench_with_input(BenchmarkId::from_parameter(faces), &pose, |b, pose| {
            b.iter(|| {
                clipper.recompute(black_box(pose));
                black_box(clipper.clipped().len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_recompute);
criterion_main!(benches);
