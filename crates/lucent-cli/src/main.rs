//! lucent CLI - renders the built-in demo scene to a PNG.

use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use lucent_geometry::{Material, Shape, Sphere, Triangle};
use lucent_math::{Color, Dir3, Point3, Vec3};
use lucent_render::{render, Camera};
use lucent_scene::{Light, Scene};
use lucent_trace::{BeamSampler, Tracer};

#[derive(Parser)]
#[command(name = "lucent")]
#[command(about = "Whitted-style ray tracer", long_about = None)]
struct Cli {
    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Output PNG path
    #[arg(short, long, default_value = "lucent.png")]
    output: PathBuf,

    /// Soft-shadow samples per light (1 disables soft shadows)
    #[arg(long, default_value_t = 32)]
    samples: usize,

    /// Intersect the flat scene instead of building a uniform grid
    #[arg(long)]
    no_grid: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let scene = demo_scene()?;
    let tracer = if cli.no_grid {
        Tracer::new(&scene)
    } else {
        Tracer::with_grid(&scene)?
    };
    let tracer = if cli.samples > 1 {
        tracer.with_soft_shadows(BeamSampler::new(cli.samples))
    } else {
        tracer
    };

    let camera = Camera::builder()
        .location(Point3::new(0.0, 0.0, 1000.0))
        .direction(-Vec3::z(), Vec3::y())
        .plane_size(200.0, 200.0)
        .plane_distance(1000.0)
        .build()?;

    let frame = render(&camera, &tracer, cli.width, cli.height, scene.background);
    frame.save_png(&cli.output)?;
    info!("done: {}", cli.output.display());
    Ok(())
}

/// Two shaded spheres over a reflective floor, lit by a spot and a
/// disk-shaped point light that casts soft shadows.
fn demo_scene() -> Result<Scene> {
    let mut scene = Scene::new()
        .with_ambient(Color::splat(10.0))
        .with_background(Color::BLACK);

    let shiny = Material::default()
        .with_kd(Color::splat(0.4))
        .with_ks(Color::splat(0.3))
        .with_shininess(100);

    scene.add_shape(
        Shape::new(Sphere::new(Point3::new(-35.0, -20.0, -60.0), 30.0))
            .with_emission(Color::new(20.0, 60.0, 110.0))
            .with_material(shiny.with_kt(Color::splat(0.3))),
    );
    scene.add_shape(
        Shape::new(Sphere::new(Point3::new(30.0, 25.0, -40.0), 20.0))
            .with_emission(Color::new(110.0, 40.0, 20.0))
            .with_material(shiny),
    );

    // Reflective floor, large enough to stay bounded but catch both
    // spheres' mirror images.
    let floor = Material::default()
        .with_kd(Color::splat(0.2))
        .with_kr(Color::splat(0.6));
    scene.add_shape(
        Shape::new(
            Triangle::new(
                Point3::new(-300.0, -55.0, 200.0),
                Point3::new(300.0, -55.0, 200.0),
                Point3::new(0.0, -55.0, -600.0),
            )?,
        )
        .with_material(floor),
    );

    scene.add_light(
        Light::spot(
            Color::new(700.0, 400.0, 400.0),
            Point3::new(40.0, 40.0, 115.0),
            Dir3::new_normalize(Vec3::new(-1.0, -1.0, -4.0)),
        )
        .with_attenuation(1.0, 4e-4, 2e-5),
    );
    scene.add_light(
        Light::point(Color::splat(400.0), Point3::new(-80.0, 60.0, 50.0))
            .with_attenuation(1.0, 1e-4, 1e-5)
            .with_radius(15.0),
    );

    Ok(scene)
}
