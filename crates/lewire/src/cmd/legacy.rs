use lewire_codec::{pack_string_legacy, LEGACY_PREFIX_SIZE};
use tracing::debug;

use crate::cmd::LegacyArgs;
use crate::exit::{codec_error, CliResult, SUCCESS};
use crate::output::{print_raw, print_report, Field, OutputFormat, Report};

pub fn run(args: LegacyArgs, format: OutputFormat) -> CliResult<i32> {
    let frame = pack_string_legacy(args.text.as_deref())
        .map_err(|err| codec_error("legacy encode failed", err))?;
    debug!(
        size = frame.len(),
        payload = frame.len() - LEGACY_PREFIX_SIZE,
        "encoded legacy string"
    );

    if matches!(format, OutputFormat::Raw) {
        print_raw(&frame);
        return Ok(SUCCESS);
    }

    let value = args.text.unwrap_or_else(|| "null".to_string());
    let fields = vec![Field::new(0, "legacy-string", 0, &frame, value)];
    print_report(&Report::new("legacy", &frame, fields, 0), format);
    Ok(SUCCESS)
}
