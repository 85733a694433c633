//! An articulated car assembled from the built-in solids.
//!
//! The body is one scaled cube; the four wheels are clones of a single
//! 20-sided prism mesh hanging off two axle groups, so steering the front
//! axle or spinning both is a single group-transform update per axle per
//! frame. Run with `RUST_LOG=debug` to watch the factory and player, or
//! `RUST_LOG=trace` to see every draw call.

use trestle::prelude::*;

const BODY_RED: [f32; 4] = [0.8, 0.1, 0.1, 1.0];
const DOOR_GREEN: [f32; 4] = [0.1, 0.6, 0.2, 1.0];
const WINDOW_BLUE: [f32; 4] = [0.2, 0.3, 0.8, 1.0];
const TYRE_GREY: [f32; 4] = [0.15, 0.15, 0.15, 1.0];

/// Node handles for the parts the animation steers.
struct Car {
    front_axle: NodeId,
    back_axle: NodeId,
}

fn build_car(factory: &mut MeshFactory, scene: &mut Scene) -> Result<Car> {
    let cube = factory.make(SolidKind::Cube)?;
    let wedge = factory.make(SolidKind::Wedge)?;
    let tyre = factory.make(SolidKind::Prism(20))?;

    // Body: one stretched cube, scaled up as a whole group.
    let body = scene.add_drawable(scene.root(), Drawable::new(cube.clone(), BODY_RED));
    scene.transform(
        body,
        Transform::identity()
            .translate(0.0, -1.0, 0.0)
            .scale_xyz(2.0, 0.8, 5.0),
    );
    scene.grouped(body, Transform::identity().scale(3.0));

    let door = scene.add_drawable(body, Drawable::new(cube.clone(), DOOR_GREEN));
    scene.transform(
        door,
        Transform::identity()
            .translate(2.0, -1.0, 0.0)
            .scale_xyz(0.25, 0.8, 1.0),
    );

    // Axles: empty grouping nodes; the animation repositions them each frame.
    let front_axle = scene.add(body);
    let back_axle = scene.add(body);

    // Four wheels stamped from one template, one shared tyre mesh.
    let template = Drawable::new(tyre, TYRE_GREY);
    for axle in [front_axle, back_axle] {
        for side in [2.0f32, -2.0] {
            let wheel = scene.add_drawable(axle, template.clone());
            scene.transform(
                wheel,
                Transform::identity()
                    .translate(side, 0.0, 0.0)
                    .rotate_y(Deg(90.0))
                    .scale_xyz(1.0, 1.0, 0.35),
            );
        }
    }

    // Cabin: two wedge windows leaning against a cube mid-section.
    let cabin = scene.add(body);
    let window_front = scene.add_drawable(cabin, Drawable::new(wedge.clone(), WINDOW_BLUE));
    scene.transform(
        window_front,
        Transform::identity()
            .translate(0.0, -0.2, 1.5)
            .scale_xyz(2.0, 1.5, 1.5)
            .rotate_y(Deg(-90.0)),
    );
    let window_mid = scene.add_drawable(cabin, Drawable::new(cube, WINDOW_BLUE));
    scene.transform(
        window_mid,
        Transform::identity()
            .translate(0.0, 0.55, 0.0)
            .scale_xyz(2.0, 0.75, 1.5),
    );
    let window_back = scene.add_drawable(cabin, Drawable::new(wedge, WINDOW_BLUE));
    scene.transform(
        window_back,
        Transform::identity()
            .translate(0.0, -0.2, -1.5)
            .scale_xyz(2.0, 1.5, 1.5)
            .rotate_y(Deg(90.0)),
    );

    Ok(Car {
        front_axle,
        back_axle,
    })
}

/// Bounces a parameter between 0 and 1, steering the front axle and
/// spinning all four wheels.
struct DriveAnimation {
    car: Car,
    t: f32,
    direction: f32,
}

impl DriveAnimation {
    fn new(car: Car) -> Self {
        Self {
            car,
            t: 0.0,
            direction: 1.0,
        }
    }
}

fn lerp(y0: f32, y1: f32, t: f32) -> f32 {
    y0 * (1.0 - t) + y1 * t
}

impl Animation for DriveAnimation {
    fn initialize(&mut self, _scene: &mut Scene) {
        // The car is assembled in main so mesh errors surface there.
    }

    fn update(&mut self, delta_time: f32, scene: &mut Scene) {
        self.t += self.direction * 0.25 * delta_time;
        if !(0.0..=1.0).contains(&self.t) {
            self.direction = -self.direction;
            self.t = self.t.clamp(0.0, 1.0);
        }

        let steer = lerp(20.0, -20.0, self.t);
        let spin = lerp(0.0, -360.0, self.t);

        scene.grouped(
            self.car.front_axle,
            Transform::identity()
                .translate(0.0, -2.0, 2.5)
                .rotate_y(Deg(steer))
                .rotate_x(Deg(spin)),
        );
        scene.grouped(
            self.car.back_axle,
            Transform::identity()
                .translate(0.0, -2.0, -2.5)
                .rotate_x(Deg(spin)),
        );
    }

    fn name(&self) -> &str {
        "drive"
    }

    fn reset(&mut self, _scene: &mut Scene) {
        self.t = 0.0;
        self.direction = 1.0;
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut factory = MeshFactory::new();
    let mut scene = Scene::new();
    let car = build_car(&mut factory, &mut scene)?;

    let mut player = AnimationPlayer::new();
    player.attach(Box::new(DriveAnimation::new(car)), &mut scene);
    player.set_fixed_timestep(Some(0.1));

    let mut renderer = TraceRenderer::new();
    for _ in 0..120 {
        player.update(0.1, &mut scene);
        scene.draw(&mut renderer);
    }

    let stats = scene.statistics();
    println!(
        "{} nodes, {} drawables, {} vertices, {} triangles, {} distinct meshes, {} draw calls",
        stats.node_count,
        stats.drawable_count,
        stats.total_vertices,
        stats.total_triangles,
        factory.cached_count(),
        renderer.draw_calls()
    );

    Ok(())
}
