use std::io::Write;

use crate::error::{AncError, AncResult};
use crate::fixed_point::PackedWord;

/// Returns the smallest address width, at least 1 bit, that can index `len` words.
pub fn address_width_for(len: usize) -> u32 {
    let mut width = 1;
    while width < usize::BITS && (1usize << width) < len {
        width += 1;
    }
    width
}

fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Fails unless `name` is a plain Verilog identifier.
pub fn validate_module_name(name: &str) -> AncResult<()> {
    if !is_valid_identifier(name) {
        return Err(AncError::InvalidModuleName(name.into()));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomOptions {
    pub module_name: String,
    pub address_width: u32,
}

impl RomOptions {
    /// Options with the narrowest address bus that fits `len` words.
    pub fn for_table(module_name: &str, len: usize) -> Self {
        RomOptions {
            module_name: module_name.into(),
            address_width: address_width_for(len),
        }
    }

    /// Checks that the module name is usable and that `len` words fit the address bus.
    pub fn validate(&self, len: usize) -> AncResult<()> {
        validate_module_name(&self.module_name)?;
        let fits = self.address_width >= usize::BITS || len <= (1usize << self.address_width);
        if self.address_width == 0 || !fits {
            return Err(AncError::AddressWidth {
                len,
                width: self.address_width,
            });
        }
        Ok(())
    }
}

/// Writes `table` as a synchronous Verilog ROM: a clocked `case` over the
/// address, one arm per word, with a zero default for unused addresses.
pub fn write_verilog_rom<W: Write>(
    writer: &mut W,
    table: &[PackedWord],
    options: &RomOptions,
) -> AncResult<()> {
    options.validate(table.len())?;
    let width = options.address_width;

    writeln!(writer, "module {} (", options.module_name)?;
    writeln!(writer, "    input wire clk,")?;
    writeln!(writer, "    input wire [{}:0] addr,", width - 1)?;
    writeln!(writer, "    output reg [31:0] data")?;
    writeln!(writer, ");")?;
    writeln!(writer)?;
    writeln!(writer, "    always @(posedge clk) begin")?;
    writeln!(writer, "        case(addr)")?;
    for (address, word) in table.iter().enumerate() {
        writeln!(
            writer,
            "            {}'d{}: data <= 32'h{};",
            width, address, word
        )?;
    }
    writeln!(writer, "            default: data <= 32'h00000000;")?;
    writeln!(writer, "        endcase")?;
    writeln!(writer, "    end")?;
    writeln!(writer, "endmodule")?;
    Ok(())
}
