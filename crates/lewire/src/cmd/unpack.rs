use bytes::Buf;
use lewire_codec::{CodecConfig, Unpacker, Utf8Policy, WireType, MAX_TEXT_LEN};
use tracing::{debug, warn};

use crate::cmd::UnpackArgs;
use crate::exit::{codec_error, hex_error, CliResult, SUCCESS};
use crate::output::{print_report, Field, OutputFormat, Report};

pub fn run(args: UnpackArgs, format: OutputFormat) -> CliResult<i32> {
    let wire = decode_hex(&args.hex)?;
    let config = CodecConfig {
        utf8: if args.strict_utf8 {
            Utf8Policy::Strict
        } else {
            Utf8Policy::Lossy
        },
        max_text_len: args.max_text_len.unwrap_or(MAX_TEXT_LEN),
    };

    let mut unpacker = Unpacker::with_config(&wire[..], config);
    let mut fields = Vec::with_capacity(args.layout.len());

    for (index, wire_type) in args.layout.iter().copied().enumerate() {
        let offset = unpacker.position();
        let value = unpack_one(&mut unpacker, wire_type).map_err(|err| {
            codec_error(&format!("unpack failed at value {index} ({wire_type})"), err)
        })?;
        let end = unpacker.position();
        fields.push(Field::new(
            index,
            wire_type.name(),
            offset,
            &wire[offset..end],
            value,
        ));
    }

    let trailing = unpacker.remaining();
    if trailing > 0 {
        warn!(trailing, "input continues past the layout");
    }
    debug!(values = fields.len(), size = wire.len(), "unpacked values");

    print_report(&Report::new("unpack", &wire, fields, trailing), format);
    Ok(SUCCESS)
}

fn unpack_one<B: Buf>(unpacker: &mut Unpacker<B>, wire_type: WireType) -> lewire_codec::Result<String> {
    Ok(match wire_type {
        WireType::Int32 => unpacker.int()?.to_string(),
        WireType::Int64 => unpacker.long()?.to_string(),
        WireType::Float32 => format!("{:?}", unpacker.float()?),
        WireType::Float64 => format!("{:?}", unpacker.double()?),
        WireType::Text => unpacker.string()?,
    })
}

/// Join hex arguments, ignoring whitespace, `:` separators and a `0x` prefix.
fn decode_hex(parts: &[String]) -> CliResult<Vec<u8>> {
    let joined: String = parts
        .iter()
        .map(|part| strip_hex_prefix(part.trim()))
        .flat_map(str::chars)
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    hex::decode(&joined).map_err(|err| hex_error("invalid hex input", err))
}

fn strip_hex_prefix(part: &str) -> &str {
    part.strip_prefix("0x")
        .or_else(|| part.strip_prefix("0X"))
        .unwrap_or(part)
}
