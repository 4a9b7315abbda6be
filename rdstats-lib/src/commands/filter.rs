use super::Host;
use super::common::{CartArgs, init_logging};
use crate::Result;
use crate::carts::{RivendellCart, read_list_file};
use crate::reports::backup_existing;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use csv::{Terminator, WriterBuilder};
use ohno::IntoAppError;
use std::io::Write;

const LOG_TARGET: &str = "  commands";

/// Written in place of the value when a desired field does not exist
pub const INVALID_FIELD_NAME: &str = "INVALID FIELD NAME";

#[derive(Parser, Debug)]
pub struct FilterArgs {
    #[command(flatten)]
    pub carts: CartArgs,

    /// File listing the cart fields to write, one field name per line
    #[arg(value_name = "DESIRED_FIELDS_FILE")]
    pub desired_fields_file: Utf8PathBuf,

    /// Keep macro carts
    #[arg(long)]
    pub include_macros: bool,

    /// End every line with a comma
    #[arg(long)]
    pub use_trailing_comma: bool,
}

/// The values of `fields` for one cart, in the order given.
fn select_fields<'a>(cart: &'a RivendellCart, fields: &[String]) -> Vec<&'a str> {
    fields.iter().map(|name| cart.field(name).unwrap_or(INVALID_FIELD_NAME)).collect()
}

/// Write one CRLF-terminated row per cart, without a header row.
pub fn write_filtered_carts(path: &Utf8Path, carts: &[RivendellCart], fields: &[String], trailing_comma: bool) -> Result<()> {
    let _ = backup_existing(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(Terminator::CRLF)
        .from_path(path)
        .into_app_err_with(|| format!("creating filter report '{path}'"))?;

    for cart in carts {
        let mut values = select_fields(cart, fields);
        if trailing_comma {
            values.push("");
        }
        writer.write_record(&values)?;
    }

    writer.flush().into_app_err_with(|| format!("writing filter report '{path}'"))?;
    Ok(())
}

fn filter_cart_report_inner(args: &FilterArgs) -> Result<usize> {
    let fields = read_list_file(&args.desired_fields_file)?;
    let carts = args.carts.load_carts(args.include_macros)?;

    if let Some(cart) = carts.first() {
        for name in fields.iter().filter(|name| cart.field(name).is_none()) {
            log::warn!(target: LOG_TARGET, "Unknown field '{name}' will be written as '{INVALID_FIELD_NAME}'");
        }
    }

    write_filtered_carts(&args.carts.output, &carts, &fields, args.use_trailing_comma)?;

    Ok(carts.len())
}

pub fn filter_cart_report<H: Host>(host: &mut H, args: &FilterArgs) -> Result<()> {
    init_logging(args.carts.log_level);

    match filter_cart_report_inner(args) {
        Ok(count) => {
            let _ = writeln!(host.output(), "Wrote {count} cart(s) to {}", args.carts.output);
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Unable to filter the cart dump: {e}");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carts::CartLoader;
    use std::fs;

    const DUMP: &str = "CART_NUMBER,CUT_NUMBER,TYPE,GROUP_NAME,TITLE,ARTIST,ALBUM,YEAR,ISRC,ISCI,LABEL,CLIENT,AGENCY,PUBLISHER,COMPOSER,CONDUCTOR,SONG_ID,USER_DEFINED,DESCRIPTION,OUTCUE,FILENAME,LENGTH,START_POINT,END_POINT,SEGUE_START_POINT,SEGUE_END_POINT,HOOK_START_POINT,HOOK_END_POINT,TALK_START_POINT,TALK_END_POINT,FADEUP_POINT,FADEDOWN_POINT,SCHED_CODES\r\n\
        1,1,audio,LEGAL_ID,Alternative,Legal ID,,,,,,,,,,,,,We Are Marshall (Cheer),,000001_001.wav,:07,0,7523,7079,7497,-1,-1,-1,-1,-1,-1,\r\n\
        100249,1,audio,ALTERNATIV,\"Calm, Intention\",Morning Teleportation,,2017,,,,,,,,,,,,,100249_001.wav,4:17,0,257000,252000,257000,-1,-1,0,3000,-1,-1,2015s\r\n";

    fn carts() -> Vec<RivendellCart> {
        CartLoader::default().load_str(DUMP).unwrap()
    }

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_select_fields_in_order() {
        let carts = carts();
        assert_eq!(
            select_fields(&carts[0], &fields(&["LENGTH", "cart_number", "Title"])),
            vec![":07", "1", "Alternative"]
        );
    }

    #[test]
    fn test_select_unknown_field() {
        let carts = carts();
        assert_eq!(select_fields(&carts[1], &fields(&["BOGUS", "type"])), vec![INVALID_FIELD_NAME, "audio"]);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_write_filtered_carts() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("filtered.csv")).unwrap();

        write_filtered_carts(&path, &carts(), &fields(&["CART_NUMBER", "TITLE"]), false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1,Alternative\r\n100249,\"Calm, Intention\"\r\n");
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_write_filtered_carts_with_trailing_comma() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("filtered.csv")).unwrap();
        fs::write(&path, "previous").unwrap();

        write_filtered_carts(&path, &carts(), &fields(&["GROUP_NAME"]), true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "LEGAL_ID,\r\nALTERNATIV,\r\n");
        assert_eq!(fs::read_to_string(dir.path().join("filtered_old.csv")).unwrap(), "previous");
    }
}
