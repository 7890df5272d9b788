//! Build-script helper that emits wrapper units for the given model
//! descriptors under `OUT_DIR`.
//!
//! Descriptors are plain expressions so build scripts can construct them
//! inline or pull them from a fixtures crate.
#[macro_export]
macro_rules! emit_wrappers {
    ($($model:expr),+ $(,)?) => {
        use std::{env::var, path::PathBuf};

        //
        // CARGO
        //

        println!("cargo:rerun-if-changed=build.rs");

        // Get the output directory set by Cargo
        let out_dir = var("OUT_DIR").expect("OUT_DIR not set");
        let out_root = PathBuf::from(out_dir);

        //
        // WRAPPER UNITS
        //

        $(
            ::wirewrap::build::emit_wrapper(&$model, &out_root)?;
        )+
    };
}
