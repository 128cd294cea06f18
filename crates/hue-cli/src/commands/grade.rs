//! Grading commands: matrix, rotate, pigment, negate and preset-driven apply.
//!
//! Every command loads its images into a [`Session`] so a modifier whose size
//! differs from the input is rejected before any engine runs.

use anyhow::{Context, Result};
use hue_core::GradeParams;
use hue_ops::{Session, Transform};
use std::path::Path;
use tracing::{info, trace};

use super::{load_image, save_image};
use crate::config::resolve_params;
use crate::{ApplyArgs, IoArgs, MatrixArgs, NegateArgs, PigmentArgs, RotateArgs};

pub fn run_matrix(args: MatrixArgs, verbose: u8) -> Result<()> {
    let params = resolve_params(args.preset.as_deref(), args.matrix.as_deref(), None, None)?;
    render(&args.io, args.modifier.as_deref(), Transform::Matrix, params, verbose)
}

pub fn run_rotate(args: RotateArgs, verbose: u8) -> Result<()> {
    let params = resolve_params(args.preset.as_deref(), None, args.angles.as_deref(), None)?;
    render(&args.io, None, Transform::Rotation, params, verbose)
}

pub fn run_pigment(args: PigmentArgs, verbose: u8) -> Result<()> {
    let params = resolve_params(args.preset.as_deref(), None, None, args.pigments.as_deref())?;
    render(&args.io, None, Transform::Pigment, params, verbose)
}

pub fn run_negate(args: NegateArgs, verbose: u8) -> Result<()> {
    render(&args.io, None, Transform::Negate, GradeParams::default(), verbose)
}

pub fn run_apply(args: ApplyArgs, verbose: u8) -> Result<()> {
    let transform: Transform = args.transform.parse()?;
    let params = resolve_params(
        args.preset.as_deref(),
        args.matrix.as_deref(),
        args.angles.as_deref(),
        args.pigments.as_deref(),
    )?;
    render(&args.io, args.modifier.as_deref(), transform, params, verbose)
}

fn render(
    io: &IoArgs,
    modifier: Option<&Path>,
    transform: Transform,
    params: GradeParams,
    verbose: u8,
) -> Result<()> {
    trace!(input = %io.input.display(), %transform, "grade::run");

    let mut session = Session::new();
    session.load_base(load_image(&io.input)?)?;
    if let Some(path) = modifier {
        session
            .load_modifier(load_image(path)?)
            .with_context(|| format!("Modifier rejected: {}", path.display()))?;
    }

    session.set_params(params)?;
    session.show(transform)?;
    let output = session.render().context("No render produced")?;

    info!(
        %transform,
        width = output.width(),
        height = output.height(),
        output = %io.output.display(),
        "Rendered"
    );
    save_image(&io.output, output, io.quality)?;

    if verbose > 0 {
        println!("{}: {} -> {}", transform, io.input.display(), io.output.display());
    }
    Ok(())
}
