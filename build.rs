// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Falls back to idempotent placeholders outside a git checkout.
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .emit()?;
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
