pub mod object;

pub use object::SceneObject;
