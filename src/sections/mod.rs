// Landing page sections

mod footer;
mod gallery;
mod hero;
mod nav;
mod technology;

pub use footer::Footer;
pub use gallery::ExamplesGallery;
pub use hero::Hero;
pub use nav::Nav;
pub use technology::TechnologySections;
