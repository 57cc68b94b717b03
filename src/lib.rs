#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod bounding_box;
pub mod draw;
pub mod error;
pub mod scene;
pub mod shape;
pub mod style;
pub mod subdivision;

pub use crate::error::{Error, Result};
pub use crate::scene::{Command, Scene, Settings, Step};
pub use crate::shape::Shape;
pub use crate::style::{Color, Figure, Style};
pub use crate::subdivision::Emission;
