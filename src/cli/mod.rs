//! CLI interface for entrain-plot

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use entrain_plot::curves::{EdgeShape, Waveform};
use entrain_plot::request::{
    BeatKind, CurveRequest, DropParams, GateParams, IsoCycleParams, SigmoidParams,
};

/// Render diagnostic charts of entrainment frequency curves
#[derive(Parser)]
#[command(name = "entrain-plot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log sampling and layout details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the sigmoid beat transition curve
    #[command(allow_negative_numbers = true)]
    Sigmoid(SigmoidArgs),

    /// Render the exponential drop curve (continuous or stepped)
    #[command(allow_negative_numbers = true)]
    Drop(DropArgs),

    /// Render one isochronic pulse cycle: envelope and gated waveform
    #[command(name = "iso-cycle", allow_negative_numbers = true)]
    IsoCycle(IsoCycleArgs),
}

#[derive(Args)]
pub struct SigmoidArgs {
    /// Output PNG path
    #[arg(long)]
    pub out: PathBuf,

    /// Transition length in minutes
    #[arg(long)]
    pub drop_min: f64,

    /// Beat frequency at the start, in Hz
    #[arg(long)]
    pub beat_start: f64,

    /// Beat frequency at the end, in Hz
    #[arg(long)]
    pub beat_target: f64,

    /// Steepness
    #[arg(long)]
    pub sig_l: f64,

    /// Horizontal shift of the midpoint, in minutes
    #[arg(long)]
    pub sig_h: f64,

    /// Amplitude
    #[arg(long)]
    pub sig_a: f64,

    /// Vertical offset
    #[arg(long)]
    pub sig_b: f64,
}

#[derive(Args)]
pub struct DropArgs {
    /// Output PNG path
    #[arg(long)]
    pub out: PathBuf,

    /// Transition length in minutes
    #[arg(long)]
    pub drop_min: f64,

    /// Beat frequency at the start, in Hz
    #[arg(long)]
    pub beat_start: f64,

    /// Beat frequency at the end, in Hz
    #[arg(long)]
    pub beat_target: f64,

    /// Non-zero for a continuous slide, zero for steps
    #[arg(long)]
    pub slide: i64,

    /// Number of steps
    #[arg(long)]
    pub n_step: i64,

    /// Length of each step in seconds
    #[arg(long)]
    pub step_len_sec: i64,

    /// 0 binaural beat, 1 pulse, 2 monaural beat
    #[arg(long)]
    pub mode_kind: i64,
}

#[derive(Args)]
pub struct IsoCycleArgs {
    /// Output PNG path
    #[arg(long)]
    pub out: PathBuf,

    /// Carrier frequency in Hz
    #[arg(long)]
    pub carrier_hz: f64,

    /// Pulse rate in Hz
    #[arg(long)]
    pub pulse_hz: f64,

    /// Amplitude in percent
    #[arg(long)]
    pub amp_pct: f64,

    /// 0 sine, 1 square, 2 triangle, 3 sawtooth
    #[arg(long)]
    pub waveform: i64,

    /// Non-zero to use the custom gate below instead of the threshold gate
    #[arg(long)]
    pub opt_i: i64,

    /// Gate start, as a fraction of the cycle
    #[arg(long)]
    pub i_s: f64,

    /// Gate duty cycle
    #[arg(long)]
    pub i_d: f64,

    /// Attack, as a fraction of the open window
    #[arg(long)]
    pub i_a: f64,

    /// Release, as a fraction of the open window
    #[arg(long)]
    pub i_r: f64,

    /// Edge shape: 0 step, 1 linear, 2 smoothstep, 3 smootherstep
    #[arg(long)]
    pub i_e: i64,
}

impl Commands {
    /// Split into the render request and the output path
    pub fn into_request(self) -> (CurveRequest, PathBuf) {
        match self {
            Commands::Sigmoid(a) => (
                CurveRequest::Sigmoid(SigmoidParams {
                    drop_min: a.drop_min,
                    beat_start: a.beat_start,
                    beat_target: a.beat_target,
                    l: a.sig_l,
                    h: a.sig_h,
                    a: a.sig_a,
                    b: a.sig_b,
                }),
                a.out,
            ),
            Commands::Drop(a) => (
                CurveRequest::Drop(DropParams {
                    drop_min: a.drop_min,
                    beat_start: a.beat_start,
                    beat_target: a.beat_target,
                    slide: a.slide != 0,
                    n_step: a.n_step,
                    step_len_sec: a.step_len_sec,
                    kind: BeatKind::from_code(a.mode_kind),
                }),
                a.out,
            ),
            Commands::IsoCycle(a) => {
                let gate = (a.opt_i != 0).then(|| GateParams {
                    start: a.i_s,
                    duty: a.i_d,
                    attack: a.i_a,
                    release: a.i_r,
                    edge: EdgeShape::from_code(a.i_e),
                });
                (
                    CurveRequest::IsoCycle(IsoCycleParams {
                        carrier_hz: a.carrier_hz,
                        pulse_hz: a.pulse_hz,
                        amp_pct: a.amp_pct,
                        waveform: Waveform::from_code(a.waveform),
                        gate,
                    }),
                    a.out,
                )
            }
        }
    }
}
