use std::io::Write;

use crate::error::AncResult;
use crate::fixed_point::PackedWord;

/// Writes one 8 digit hex word per line in address order, the format read by
/// Verilog's `$readmemh`.
pub fn write_hex_image<W: Write>(writer: &mut W, table: &[PackedWord]) -> AncResult<()> {
    for word in table {
        writeln!(writer, "{}", word)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_image() {
        let table = [
            PackedWord::from_value(0xFFC0_0080),
            PackedWord::from_value(0x0000_0001),
        ];
        let mut out = Vec::new();
        write_hex_image(&mut out, &table).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ffc00080\n00000001\n");
    }
}
