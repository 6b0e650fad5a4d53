use scale_geom::log::ProjectError;
use scale_geom::{
    cross_product_2d, cross_product_3d, dot_product, log, scalar_triple_product, warn, Vector, Vector2f, Vector3f,
};

mod project
{
    pub const APP_NAME: &str = "scaleGeom";
    pub const VERSION_MAJOR: u32 = 0;
    pub const VERSION_MINOR: u32 = 1;
}

fn run() -> scale_geom::Result<()>
{
    let mut vec1: Vector<f32> = Vector::xyz(5.1, 6.2, 8.3);
    let vec2: Vector<f32> = Vector::xyz(4.2, 5.1, 6.5);

    log!("vec1 = {}, vec2 = {}", vec1, vec2);
    log!("vec1 + vec2 = {}", vec1 + vec2);
    log!("vec1 - vec2 = {}", vec1 - vec2);
    log!("vec1 == vec2: {}", vec1 == vec2);
    log!("vec1 != vec2: {}", vec1 != vec2);
    log!("vec1 < vec2: {}", vec1.less_than(&vec2));
    log!("vec1 > vec2: {}", vec1.greater_than(&vec2));
    log!("dot product of vec1 and vec2 is {}", dot_product(&vec1, &vec2));
    log!("cross product of vec1 and vec2 is {}", cross_product_3d(vec1, vec2));

    let magnitude = vec1.magnitude();
    vec1.normalize()?;
    log!("magnitude of vec1 is {}", magnitude);
    log!("normalized vec1 is {}", vec1);

    let a = Vector2f::xy(3.0, 4.0);
    let b = Vector2f::xy(-4.0, 3.0);
    log!("2D cross product of {} and {} is {}", a, b, cross_product_2d(a, b));

    let v3 = Vector3f::xyz(7.0, 8.0, 9.0);
    log!(
        "scalar triple product of {}, {} and {} is {}",
        vec1,
        vec2,
        v3,
        scalar_triple_product(vec1, vec2, v3)
    );

    match vec2.get(3) {
        Ok(w) => log!("vec2 has a fourth coordinate {}", w),
        Err(err) => warn!("{}", err),
    }
    Ok(())
}

fn main() -> std::process::ExitCode
{
    log!("{} v{}.{}", project::APP_NAME, project::VERSION_MAJOR, project::VERSION_MINOR);

    match run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            warn!("Demo stopped early");
            err.handle();
            std::process::ExitCode::FAILURE
        }
    }
}
