//! Built-in content: the classes, races, backgrounds and feats of the
//! fifth-edition reference document.

mod backgrounds;
mod classes;
mod feats;
mod races;

use crate::registry::StaticSource;

pub use classes::available_classes;

/// Every built-in content source, in registration order.
pub fn sources() -> Vec<StaticSource> {
    let mut sources = classes::sources();
    sources.push(StaticSource { name: "backgrounds", build: backgrounds::features });
    sources.push(StaticSource { name: "races", build: races::features });
    sources.push(StaticSource { name: "feats", build: feats::features });
    sources
}
