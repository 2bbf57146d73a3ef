use knuffel::errors::DecodeError;

#[derive(knuffel::Decode, Debug, Clone, PartialEq)]
pub struct Layout {
    #[knuffel(child, unwrap(argument), default = Self::default().gap)]
    pub gap: u16,
    #[knuffel(child, unwrap(argument), default = Self::default().default_columns)]
    pub default_columns: Columns,
    #[knuffel(child, unwrap(argument), default = Self::default().placeholder_height)]
    pub placeholder_height: u32,
    #[knuffel(children(name = "breakpoint"))]
    pub breakpoints: Vec<Breakpoint>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            gap: 20,
            default_columns: Columns(1),
            placeholder_height: 1000,
            breakpoints: vec![
                Breakpoint {
                    min_width: 1200,
                    columns: Columns(3),
                },
                Breakpoint {
                    min_width: 800,
                    columns: Columns(2),
                },
                Breakpoint {
                    min_width: 500,
                    columns: Columns(1),
                },
            ],
        }
    }
}

/// Viewport width threshold selecting a column count.
#[derive(knuffel::Decode, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    /// The breakpoint matches viewports at least this wide, in logical pixels.
    #[knuffel(property)]
    pub min_width: u32,
    #[knuffel(property)]
    pub columns: Columns,
}

/// Number of gallery columns, always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Columns(pub u8);

impl Columns {
    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

impl<S: knuffel::traits::ErrorSpan> knuffel::DecodeScalar<S> for Columns {
    fn type_check(
        type_name: &Option<knuffel::span::Spanned<knuffel::ast::TypeName, S>>,
        ctx: &mut knuffel::decode::Context<S>,
    ) {
        <u8 as knuffel::DecodeScalar<S>>::type_check(type_name, ctx)
    }

    fn raw_decode(
        val: &knuffel::span::Spanned<knuffel::ast::Literal, S>,
        ctx: &mut knuffel::decode::Context<S>,
    ) -> Result<Columns, DecodeError<S>> {
        let count = <u8 as knuffel::DecodeScalar<S>>::raw_decode(val, ctx)?;
        if count == 0 {
            ctx.emit_error(DecodeError::conversion(
                val,
                "column count must be at least 1",
            ));
            return Ok(Self(1));
        }

        Ok(Self(count))
    }
}
