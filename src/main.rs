//! Self-check for `math3d`.
//!
//! Evaluates the algebraic identities the library guarantees, logging each one, and exits with an
//! error as soon as one of them does not hold. Set `RUST_LOG=math3d=trace` to see every check.

use std::{any::TypeId, fmt::Debug};

use anyhow::ensure;
use log::{debug, info, trace, LevelFilter};
use math3d::*;

/// Logs this binary's messages at *debug* level to stderr, unless `RUST_LOG` says otherwise.
fn init_logger() {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .parse_default_env()
        .try_init()
        .ok();
}

fn same_type<A: 'static, B: 'static>(_: &A, _: &B) -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

fn zero_identities<T: Scalar + Debug, const N: usize>() -> anyhow::Result<()> {
    let z = Vector::<T, N>::ZERO;
    ensure!(z == z, "{z:?} == {z:?} does not hold");
    ensure!(!(z != z), "{z:?} != {z:?} holds");
    ensure!(z + z == z, "{z:?} + {z:?} is not zero");
    ensure!(z.get::<0>() == T::ZERO && z.get::<1>() == T::ZERO);
    ensure!(z.as_slice().iter().all(|&e| e == T::ZERO));
    trace!("zero identities hold for {}", std::any::type_name::<Vector<T, N>>());
    Ok(())
}

/// Checks the additive and multiplicative identities on `a`, for every scalar type.
macro_rules! identities {
    ($a:expr) => {{
        let a = $a;
        let zero = a - a;
        ensure!(a + zero == a && zero + a == a && a - zero == a, "additive identity: {a:?}");
        ensure!(1i32 * a == a && a * 1i32 == a && a / 1i32 == a, "i32 identity: {a:?}");
        ensure!(1f32 * a == a && a * 1f32 == a && a / 1f32 == a, "f32 identity: {a:?}");
        ensure!(1f64 * a == a && a * 1f64 == a && a / 1f64 == a, "f64 identity: {a:?}");
        trace!("identities hold for {a:?}");
    }};
}

/// Checks that `a + b` commutes, including its element type.
macro_rules! commutes {
    ($a:expr, $b:expr) => {{
        let (a, b) = ($a, $b);
        ensure!(a + b == b + a, "{a:?} + {b:?} does not commute");
        ensure!(same_type(&(a + b), &(b + a)));
        trace!("{a:?} + {b:?} = {:?}", a + b);
    }};
}

fn main() -> anyhow::Result<()> {
    init_logger();

    zero_identities::<i16, 2>()?;
    zero_identities::<i32, 3>()?;
    zero_identities::<f32, 4>()?;
    zero_identities::<f64, 2>()?;
    let z = Vec4d::ZERO;
    ensure!(z.get::<2>() == 0.0 && z.get::<3>() == 0.0);
    debug!("zero vectors behave");

    identities!(vec2(3i16, -4));
    identities!(vec3(1i32, 2, 3));
    identities!(vec4(0.5f32, -1.5, 2.0, 8.0));
    identities!(vec3(1e10f64, -0.25, 3.0));
    identities!(Matrix::from_rows([[1i32, 2], [3, 4]]));
    debug!("additive and multiplicative identities hold");

    commutes!(vec2(1i32, 2), vec2(0.5f32, -0.5));
    commutes!(vec3(1i16, 2, 3), vec3(4i32, 5, 6));
    commutes!(vec4(1.0f32, 2.0, 3.0, 4.0), vec4(0.5f64, 0.25, 0.125, 1.0));
    commutes!(
        Matrix::from_rows([[1i16, 2], [3, 4]]),
        Matrix::from_rows([[0.5f64, 0.5], [0.5, 0.5]])
    );
    debug!("addition commutes");

    let v = vec2(3i32, 0) + vec2(0i32, 4);
    ensure!(length_squared(v) == 25, "squared length of {v:?} is not 25");
    ensure!(length(v) == 5.0);

    let v = vec3(1i32, 0, 0);
    let u = vec3(0i32, 1, 0);
    let c = cross_product(v, u);
    ensure!(dot_product(c, v) == 0 && dot_product(c, u) == 0, "{c:?} is not orthogonal");
    ensure!(length_squared(v) * length_squared(u) == length_squared(c));

    for v in [vec2(1.0f32, 2.0), vec2(-3.5, 0.25), vec2(0.0, -7.0)] {
        ensure!(dot_product(v, v.normal()) == 0.0, "normal of {v:?} is not orthogonal");
    }
    debug!("geometric identities hold");

    let a = Matrix::from_rows([[1i32, 2], [3, 4]]);
    let b = Matrix::from_rows([[10i32, 20], [30, 40]]);
    ensure!(a + b == Matrix::from_rows([[11i32, 22], [33, 44]]));
    ensure!(b - a == Matrix::from_rows([[9i32, 18], [27, 36]]));
    ensure!(a - b == Matrix::from_rows([[-9i32, -18], [-27, -36]]));
    debug!("matrix arithmetic holds");

    let sum = vec2(1i32, 2) + vec2(1.0f32, 2.0);
    ensure!(same_type(&sum, &Vec2f::ZERO), "int + float did not promote to float");
    let scaled = Mat2::<i16>::ZERO * 2.5f64;
    ensure!(same_type(&scaled, &Mat2::<i16>::ZERO), "scaling changed the element type");
    debug!("promotion rules hold");

    info!("all checks passed");
    Ok(())
}
