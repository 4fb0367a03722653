//! `sage components` - the renderable component catalog.
//!
//! This is the same name/description table the backend model is given when
//! it decides which component to render.

use sage_core::components;

pub fn run() {
    for spec in components::all() {
        println!("{}", spec.name);
        println!("    {}", spec.description);
    }
}
