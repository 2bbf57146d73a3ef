use knuffel::errors::DecodeError;

/// One photo in the gallery catalog.
#[derive(knuffel::Decode, Debug, Clone, PartialEq)]
pub struct Item {
    #[knuffel(argument)]
    pub id: ItemId,
    #[knuffel(child, unwrap(argument))]
    pub src: String,
    #[knuffel(child, unwrap(argument), default)]
    pub alt: String,
    /// Intrinsic tile height in logical pixels.
    #[knuffel(child, unwrap(argument))]
    pub height: u32,
}

/// Stable item identifier, unique within a config.
///
/// Ids are opaque and compared exactly, so `mocha` and `Mocha` are different items.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(pub String);

impl<S: knuffel::traits::ErrorSpan> knuffel::DecodeScalar<S> for ItemId {
    fn type_check(
        type_name: &Option<knuffel::span::Spanned<knuffel::ast::TypeName, S>>,
        ctx: &mut knuffel::decode::Context<S>,
    ) {
        if let Some(type_name) = &type_name {
            ctx.emit_error(DecodeError::unexpected(
                type_name,
                "type name",
                "no type name expected for this node",
            ));
        }
    }

    fn raw_decode(
        val: &knuffel::span::Spanned<knuffel::ast::Literal, S>,
        ctx: &mut knuffel::decode::Context<S>,
    ) -> Result<ItemId, DecodeError<S>> {
        #[derive(Debug)]
        struct ItemIdSet(Vec<String>);
        match &**val {
            knuffel::ast::Literal::String(ref s) => {
                let mut id_set: Vec<String> = match ctx.get::<ItemIdSet>() {
                    Some(h) => h.0.clone(),
                    None => Vec::new(),
                };

                if id_set.iter().any(|id| id.as_str() == &**s) {
                    ctx.emit_error(DecodeError::unexpected(
                        val,
                        "item id",
                        format!("duplicate item id: {s}"),
                    ));
                    return Ok(Self(String::new()));
                }

                id_set.push(s.to_string());
                ctx.set(ItemIdSet(id_set));
                Ok(Self(s.clone().into()))
            }
            _ => {
                ctx.emit_error(DecodeError::unsupported(val, "item ids must be strings"));
                Ok(Self(String::new()))
            }
        }
    }
}
