use lewire_codec::Packer;
use tracing::debug;

use crate::cmd::PackArgs;
use crate::exit::{codec_error, CliResult, SUCCESS};
use crate::output::{print_raw, print_report, Field, OutputFormat, Report};

pub fn run(args: PackArgs, format: OutputFormat) -> CliResult<i32> {
    let mut packer = Packer::default();
    let mut spans = Vec::with_capacity(args.values.len());

    for (index, value) in args.values.iter().enumerate() {
        let offset = packer.position();
        value.pack_into(&mut packer).map_err(|err| {
            codec_error(
                &format!("pack failed at value {index} ({})", value.wire_type()),
                err,
            )
        })?;
        spans.push((offset, packer.position()));
    }

    let bytes = packer.freeze();
    debug!(values = spans.len(), size = bytes.len(), "packed values");

    if matches!(format, OutputFormat::Raw) {
        print_raw(&bytes);
        return Ok(SUCCESS);
    }

    let fields = args
        .values
        .iter()
        .zip(spans)
        .enumerate()
        .map(|(index, (value, (start, end)))| {
            Field::new(
                index,
                value.wire_type().name(),
                start,
                &bytes[start..end],
                value.to_string(),
            )
        })
        .collect();

    print_report(&Report::new("pack", &bytes, fields, 0), format);
    Ok(SUCCESS)
}
