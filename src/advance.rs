use legion::*;
use rand_pcg::Pcg64;

use crate::{shape::Shape, surface::Viewport};

#[system(for_each)]
pub fn advance_shapes(
    shape: &mut Shape,
    #[resource] viewport: &Viewport,
    #[resource] rng: &mut Pcg64,
) {
    shape.advance(*viewport, rng);
}
