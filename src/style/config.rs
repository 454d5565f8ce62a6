use crate::emotion::palette::Emotion;
use crate::foundation::core::Rgb;
use crate::foundation::rng::Rng64;

/// Row count that pixel-valued parameters (stroke widths, blur radii) are specified against; they
/// scale linearly with the output height.
pub const REFERENCE_HEIGHT: f64 = 1080.0;

/// Where per-call parameters come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamSource {
    /// Every tunable drawn from the call's seeded generator.
    #[default]
    Random,
    /// Tunables pinned to the middle of their ranges; layout (phases, positions) still comes from
    /// a generator with a constant seed so the output does not depend on the call's seed.
    Fixed,
}

/// Layout seed used by [`ParamSource::Fixed`].
pub(crate) const FIXED_LAYOUT_SEED: u64 = 0x5EED_0F_C0105;

/// Draws the parameters of one render call.
///
/// "Tuning" values (counts, frequencies, amplitudes, alphas, blur radii, post factors) honour the
/// [`ParamSource`]; "layout" values (phases, positions, orientations) always come from a generator.
pub(crate) struct ParamSampler {
    tuning: Option<Rng64>,
    layout: Rng64,
}

impl ParamSampler {
    pub(crate) fn new(source: ParamSource, rng: &mut Rng64) -> Self {
        match source {
            ParamSource::Random => Self {
                tuning: Some(rng.fork()),
                layout: rng.fork(),
            },
            ParamSource::Fixed => Self {
                tuning: None,
                layout: Rng64::new(FIXED_LAYOUT_SEED),
            },
        }
    }

    pub(crate) fn tune(&mut self, lo: f64, hi: f64) -> f64 {
        match self.tuning.as_mut() {
            Some(rng) => rng.range_f64(lo, hi),
            None => (lo + hi) * 0.5,
        }
    }

    pub(crate) fn tune_count(&mut self, lo: u32, hi: u32) -> u32 {
        match self.tuning.as_mut() {
            Some(rng) => rng.range_u32(lo, hi),
            None => lo + (hi.saturating_sub(lo) + 1) / 2,
        }
    }

    pub(crate) fn layout(&mut self, lo: f64, hi: f64) -> f64 {
        self.layout.range_f64(lo, hi)
    }

    pub(crate) fn phase(&mut self) -> f64 {
        self.layout.phase()
    }

    pub(crate) fn layout_chance(&mut self, p: f64) -> bool {
        self.layout.chance(p)
    }

    pub(crate) fn layout_seed(&mut self) -> u64 {
        self.layout.next_u64()
    }

    pub(crate) fn direction(&mut self) -> Direction {
        let all = [
            Direction::Horizontal,
            Direction::Vertical,
            Direction::Diagonal,
            Direction::Radial,
        ];
        match self.tuning.as_mut() {
            Some(rng) => all[rng.range_u32(0, 3) as usize],
            None => Direction::Diagonal,
        }
    }
}

/// Base gradient direction of the dynamic style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Left → right.
    Horizontal,
    /// Top → bottom.
    Vertical,
    /// Top-left → bottom-right.
    Diagonal,
    /// Center → corners.
    Radial,
}

impl Direction {
    /// Base position in `[0, 1]` for normalized coordinates.
    pub fn base(self, nx: f64, ny: f64) -> f64 {
        match self {
            Direction::Horizontal => nx,
            Direction::Vertical => ny,
            Direction::Diagonal => (nx + ny) * 0.5,
            Direction::Radial => {
                (nx - 0.5).hypot(ny - 0.5) / std::f64::consts::FRAC_1_SQRT_2
            }
        }
    }
}

/// One sine component: `amplitude * sin(2π * frequency * u + phase)`, where `u` is the
/// coordinate projected on the wave's orientation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SineWave {
    /// Cycles across the unit axis.
    pub frequency: f64,
    /// Peak offset in normalized units.
    pub amplitude: f64,
    /// Phase in radians.
    pub phase: f64,
    /// Orientation in radians (0 = along x).
    pub angle: f64,
}

impl SineWave {
    /// Evaluate at normalized coordinates.
    pub fn eval(&self, nx: f64, ny: f64) -> f64 {
        let u = nx * self.angle.cos() + ny * self.angle.sin();
        self.amplitude * (std::f64::consts::TAU * self.frequency * u + self.phase).sin()
    }
}

/// Dynamic style: direction gradient warped by summed sines, weighted blend, brightness jitter.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DynamicParams {
    /// Base gradient direction.
    pub direction: Direction,
    /// 3–6 independent sine waves.
    pub waves: Vec<SineWave>,
    /// Capture margin of the weighted blend (15–25).
    pub capture_margin: f64,
    /// Max relative brightness deviation per pixel.
    pub jitter: f64,
    /// Seed of the per-pixel jitter hash.
    pub jitter_seed: u64,
}

/// Wave style: horizontal gradient with decaying sine layers along y.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaveParams {
    /// 3–6 layers; amplitudes are already divided by their 1-based layer index.
    pub layers: Vec<SineWave>,
    /// Boundary blend threshold.
    pub blend_threshold: f64,
    /// Finishing blur, reference pixels.
    pub blur_radius: f64,
}

/// One translucent aurora band.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AuroraStroke {
    /// Emotion the band belongs to.
    pub emotion: Emotion,
    /// Stroke color.
    pub color: Rgb,
    /// Straight alpha.
    pub alpha: u8,
    /// Stroke width, reference pixels.
    pub width: f64,
    /// Vertical center as a fraction of height.
    pub base_y: f64,
    /// Sine component (fractions of height).
    pub sine: SineWave,
    /// Cosine component (fractions of height).
    pub cosine: SineWave,
}

impl AuroraStroke {
    /// Vertical position (fraction of height) at horizontal fraction `t`.
    pub fn y_at(&self, t: f64) -> f64 {
        let tau = std::f64::consts::TAU;
        self.base_y
            + self.sine.amplitude * (tau * self.sine.frequency * t + self.sine.phase).sin()
            + self.cosine.amplitude * (tau * self.cosine.frequency * t + self.cosine.phase).cos()
    }
}

/// Aurora style: translucent strokes over a near-black background.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AuroraParams {
    /// Background color.
    pub background: Rgb,
    /// Strokes in paint order.
    pub strokes: Vec<AuroraStroke>,
    /// Finishing blur, reference pixels.
    pub blur_radius: f64,
}

/// Shape primitive of the abstract style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Rotated ellipse.
    Ellipse,
    /// Rotated rectangle.
    Rect,
}

/// One translucent shape of the abstract style.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AbstractShape {
    /// Emotion the shape belongs to.
    pub emotion: Emotion,
    /// Fill color.
    pub color: Rgb,
    /// Straight alpha.
    pub alpha: u8,
    /// Primitive.
    pub kind: ShapeKind,
    /// Center, fractions of width/height.
    pub center: (f64, f64),
    /// Half extents, fractions of the shorter canvas edge.
    pub radii: (f64, f64),
    /// Rotation in radians.
    pub rotation: f64,
}

/// Abstract style: vertical gradient under translucent shapes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AbstractParams {
    /// Boundary blend threshold of the background rows.
    pub blend_threshold: f64,
    /// Shapes in paint order.
    pub shapes: Vec<AbstractShape>,
    /// Finishing blur, reference pixels.
    pub blur_radius: f64,
}

/// One octave of the marble noise: `weight * sin(2π fx nx + px) * cos(2π fy ny + py)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MarbleOctave {
    /// Frequency along x.
    pub freq_x: f64,
    /// Frequency along y.
    pub freq_y: f64,
    /// Phase along x.
    pub phase_x: f64,
    /// Phase along y.
    pub phase_y: f64,
    /// Octave weight.
    pub weight: f64,
}

/// Marble style: multi-octave noise with darkened veins.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MarbleParams {
    /// 4–7 octaves.
    pub octaves: Vec<MarbleOctave>,
    /// Vein stripes across the unit diagonal.
    pub vein_frequency: f64,
    /// How strongly the noise bends the veins.
    pub vein_turbulence: f64,
    /// Vein where `|sin(..)|` falls under this.
    pub vein_threshold: f64,
    /// Relative darkening applied on veins (0.06–0.15).
    pub vein_darken: f64,
    /// Boundary blend threshold.
    pub blend_threshold: f64,
    /// Finishing blur, reference pixels.
    pub blur_radius: f64,
}

/// Parameters of exactly one style.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum StyleParams {
    /// See [`DynamicParams`].
    Dynamic(DynamicParams),
    /// See [`WaveParams`].
    Waves(WaveParams),
    /// See [`AuroraParams`].
    Aurora(AuroraParams),
    /// See [`AbstractParams`].
    Abstract(AbstractParams),
    /// See [`MarbleParams`].
    Marble(MarbleParams),
}

/// Post-processing multipliers.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PostParams {
    /// 1.3–1.6
    pub saturation: f64,
    /// 1.1–1.4
    pub contrast: f64,
    /// 1.0–1.3
    pub sharpness: f64,
}

impl PostParams {
    pub(crate) fn sample(sampler: &mut ParamSampler) -> Self {
        Self {
            saturation: sampler.tune(1.3, 1.6),
            contrast: sampler.tune(1.1, 1.4),
            sharpness: sampler.tune(1.0, 1.3),
        }
    }
}

/// Everything one render call draws up front.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StyleConfig {
    /// Style-specific parameters.
    pub params: StyleParams,
    /// Post-processing multipliers.
    pub post: PostParams,
}

#[cfg(test)]
#[path = "../../tests/unit/style/config.rs"]
mod tests;
