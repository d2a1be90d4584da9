//! pio-defines: convert config headers to PlatformIO build flags.
//!
//! This library scans a C/C++ style config header of `#define` macros and
//! rewrites each definition as a `-D` compiler flag, producing the flat list
//! that PlatformIO consumes as `build_flags`.

pub mod convert;
pub mod defines;
