use legion::World;
use rand_pcg::Pcg64;

use crate::error::MystifyError;
use crate::render::palette_color;
use crate::shape::{Shape, ShapeColor, ShapeConfig};
use crate::surface::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    pub shape: ShapeConfig,
    pub polygons: u32,
    pub seed: u64,
}

pub fn init_world(
    world: &mut World,
    config: &GenerationConfig,
    viewport: Viewport,
    rng: &mut Pcg64,
) -> Result<(), MystifyError> {
    let mut shapes = std::vec::Vec::<(Shape, ShapeColor)>::new();
    shapes.reserve(config.polygons as usize);
    for index in 0..config.polygons as usize {
        let shape = Shape::new(config.shape, viewport, rng)?;
        shapes.push((shape, ShapeColor(palette_color(index))));
    }
    world.extend(shapes);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Color;
    use legion::IntoQuery;
    use rand::SeedableRng;

    fn generation_config(polygons: u32) -> GenerationConfig {
        GenerationConfig {
            shape: ShapeConfig::new(4, 12, 10).unwrap(),
            polygons,
            seed: 1,
        }
    }

    #[test]
    fn spawns_one_entity_per_polygon() {
        let mut world = World::default();
        let mut rng = Pcg64::seed_from_u64(1);
        init_world(
            &mut world,
            &generation_config(3),
            Viewport::new(640, 480),
            &mut rng,
        )
        .unwrap();
        let colors: Vec<Color> = <&ShapeColor>::query()
            .iter(&world)
            .map(|color| color.0)
            .collect();
        assert_eq!(colors, vec![Color::RED, Color::GREEN, Color::BLUE]);
    }

    #[test]
    fn tiny_viewport_is_rejected() {
        let mut world = World::default();
        let mut rng = Pcg64::seed_from_u64(1);
        let result = init_world(
            &mut world,
            &generation_config(2),
            Viewport::new(15, 15),
            &mut rng,
        );
        assert!(result.is_err());
    }
}
