#[derive(knuffel::Decode, Debug, Default, Clone, PartialEq)]
pub struct Animations {
    /// Disables all animations: tiles jump straight to their placements.
    #[knuffel(child)]
    pub off: bool,
    #[knuffel(child, default)]
    pub entrance: EntranceAnim,
    #[knuffel(child, default)]
    pub transition: TransitionAnim,
}

/// Animation played the first time the gallery lays out its tiles.
#[derive(knuffel::Decode, Debug, Clone, Copy, PartialEq)]
pub struct EntranceAnim {
    #[knuffel(child, unwrap(argument), default = Self::default().duration_ms)]
    pub duration_ms: u32,
    /// Extra delay per tile index.
    #[knuffel(child, unwrap(argument), default = Self::default().stagger_ms)]
    pub stagger_ms: u32,
    /// Vertical position tiles rise from.
    #[knuffel(child, unwrap(argument), default = Self::default().offset_y)]
    pub offset_y: u32,
    /// Initial blur radius.
    #[knuffel(child, unwrap(argument), default = Self::default().blur)]
    pub blur: u16,
    #[knuffel(child, unwrap(argument), default = Self::default().curve)]
    pub curve: Curve,
}

impl Default for EntranceAnim {
    fn default() -> Self {
        Self {
            duration_ms: 800,
            stagger_ms: 100,
            offset_y: 100,
            blur: 10,
            curve: Curve::EaseOutCubic,
        }
    }
}

/// Animation moving tiles between two layouts.
#[derive(knuffel::Decode, Debug, Clone, Copy, PartialEq)]
pub struct TransitionAnim {
    #[knuffel(child, unwrap(argument), default = Self::default().duration_ms)]
    pub duration_ms: u32,
    #[knuffel(child, unwrap(argument), default = Self::default().curve)]
    pub curve: Curve,
}

impl Default for TransitionAnim {
    fn default() -> Self {
        Self {
            duration_ms: 600,
            curve: Curve::EaseOutCubic,
        }
    }
}

#[derive(knuffel::DecodeScalar, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    Linear,
    EaseOutQuad,
    EaseOutCubic,
    EaseOutExpo,
}
