//! Color type and channel-space distance.

mod rgb;

pub use rgb::Rgb;
