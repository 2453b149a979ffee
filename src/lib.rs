//! Vector graphics engine for XY oscilloscopes, vector CRTs and galvo
//! displays.
//!
//! There is no frame buffer: the picture is a stream of DAC coordinate pairs
//! and the beam draws by visiting them in order. A [`Beam`] owns the cursor
//! and rasterizes moves, lines, arcs and stroke-font text into unit-step
//! samples for any [`DacWriter`] backend; [`PhosphorScreen`] is the bundled
//! software backend that remembers what the beam traced.
//!
//! ```
//! use beamtrace::{Beam, CaptureWriter, DisplayProfile};
//!
//! let mut beam = Beam::new(CaptureWriter::new(), &DisplayProfile::dac_12bit());
//! beam.line(100, 100, 500, 400);
//! beam.circle(2048, 2048, 600);
//! beam.draw_string("HELLO", 1200, 2048, 8);
//! assert!(!beam.writer().samples.is_empty());
//! ```

pub mod beam;
pub mod demos;
#[cfg(feature = "preview")]
pub mod display;
pub mod font;
pub mod math3d;
pub mod phosphor;
pub mod profile;
pub mod quadrature;
#[cfg(feature = "preview")]
pub mod remote;
pub mod rot;
pub mod sink;

pub use beam::Beam;
pub use phosphor::PhosphorScreen;
pub use profile::DisplayProfile;
pub use quadrature::Quadrature;
pub use rot::{Angle, VectorRot};
pub use sink::{CaptureWriter, DacWriter, OutputSink};
