//! ARISE command-line tools.
//!
//! One binary wraps the whole toolchain:
//! - `encode` / `decode` convert between operand fields and a 48-bit word.
//! - `asm` / `disasm` convert between assembly text and the 6-byte word form.
//! - `run` executes a program on the software model and dumps the registers.
//! - `describe` prints the instruction description blocks.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use logos::Logos;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use arise_assembler::assemble;
use arise_assembler::lexer::Token;
use arise_disassembler::{disassemble, format, FormatOptions, Radix};
use arise_runtime::{Machine, MachineConfig, MachineState};
use arise_spec::format::{lookup_mnemonic, FORMATS};
use arise_spec::{InstructionField, Program, Register, RegisterNaming, SLLI_OR};

#[derive(Parser, Debug)]
#[command(
    name = "arise",
    author,
    version,
    about = "ARISE custom instruction toolchain",
    long_about = "Encode, assemble, disassemble and simulate ARISE custom instructions.\n\nExamples:\n  arise encode 5 6 7 1\n  arise decode 0x01398a2b\n  arise asm prog.s -o prog.bin\n  arise run prog.s --reg x6=0xAA --reg x7=0x55"
)]
struct Cli {
    /// Output log level; RUST_LOG takes precedence when set.
    #[arg(
        short,
        long,
        value_name = "LOG",
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"],
        global = true
    )]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Copy)]
struct ListingArgs {
    /// Print ABI register names (t0, a0, ...).
    #[arg(long)]
    abi: bool,

    /// Print immediates in hex.
    #[arg(long)]
    hex: bool,
}

impl ListingArgs {
    fn options(self, show_offsets: bool) -> FormatOptions {
        FormatOptions {
            naming: if self.abi {
                RegisterNaming::Abi
            } else {
                RegisterNaming::Numeric
            },
            radix: if self.hex { Radix::Hex } else { Radix::Decimal },
            show_offsets,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode one instruction from its operand fields.
    Encode {
        #[arg(allow_hyphen_values = true, value_parser = parse_int)]
        rd: i64,
        #[arg(allow_hyphen_values = true, value_parser = parse_int)]
        rs1: i64,
        #[arg(allow_hyphen_values = true, value_parser = parse_int)]
        rs2: i64,
        /// Shift immediate (-128..=127).
        #[arg(allow_hyphen_values = true, value_parser = parse_int)]
        imm: i64,
    },

    /// Decode a 48-bit instruction word.
    Decode {
        #[arg(value_parser = parse_int)]
        word: i64,

        #[command(flatten)]
        listing: ListingArgs,
    },

    /// Assemble a source file.
    Asm {
        input: PathBuf,

        /// Write the 6-byte word form here instead of printing words.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Disassemble a file in the 6-byte word form.
    Disasm {
        input: PathBuf,

        #[command(flatten)]
        listing: ListingArgs,

        /// Omit the header and per-line offset comments.
        #[arg(long)]
        no_offsets: bool,
    },

    /// Run a program on the software model.
    Run {
        /// Assembly source, or the 6-byte word form with --binary.
        input: PathBuf,

        /// Treat the input as the 6-byte word form.
        #[arg(long)]
        binary: bool,

        /// Initial register value, e.g. --reg x6=0xAA (repeatable).
        #[arg(short, long = "reg", value_name = "REG=VALUE", value_parser = parse_assignment)]
        regs: Vec<(Register, i32)>,

        #[arg(long, default_value_t = MachineConfig::DEFAULT.max_steps)]
        max_steps: u64,

        /// Print one line per executed instruction.
        #[arg(long)]
        trace: bool,
    },

    /// Print instruction description blocks.
    Describe {
        /// Only describe this mnemonic.
        mnemonic: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Encode { rd, rs1, rs2, imm } => cmd_encode(rd, rs1, rs2, imm),
        Commands::Decode { word, listing } => cmd_decode(word, listing),
        Commands::Asm { input, output } => cmd_asm(&input, output.as_deref()),
        Commands::Disasm {
            input,
            listing,
            no_offsets,
        } => cmd_disasm(&input, listing.options(!no_offsets)),
        Commands::Run {
            input,
            binary,
            regs,
            max_steps,
            trace,
        } => cmd_run(&input, binary, &regs, max_steps, trace),
        Commands::Describe { mnemonic } => cmd_describe(mnemonic.as_deref()),
    }
}

fn cmd_encode(rd: i64, rs1: i64, rs2: i64, imm: i64) -> Result<()> {
    let word = SLLI_OR
        .encode_operands(&[rd, rs1, rs2, imm])
        .context("Failed to encode instruction")?;
    let instr = InstructionField::decode(word)?;

    println!("{:#014x}", word);
    println!("{}", hex_bytes(&Program::from_words(vec![word]).to_bytes()?));
    println!("{}", instr);
    Ok(())
}

fn cmd_decode(word: i64, listing: ListingArgs) -> Result<()> {
    if word < 0 {
        bail!("Instruction word must not be negative: {}", word);
    }
    let instr = InstructionField::decode(word as u64)
        .with_context(|| format!("Failed to decode {:#x}", word))?;
    let opts = listing.options(false);

    println!("{}", format(&instr, &opts));
    println!("  opcode = {}", instr.opcode().bit_literal());
    for (name, reg) in [("rd", instr.rd()), ("rs1", instr.rs1()), ("rs2", instr.rs2())] {
        println!("  {:<6} = {} ({})", name, reg, reg.abi_name());
    }
    println!("  imm    = {}", instr.imm());
    Ok(())
}

fn cmd_asm(input: &Path, output: Option<&Path>) -> Result<()> {
    let program = load_source(input)?;

    match output {
        Some(path) => {
            fs::write(path, program.to_bytes()?)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), words = program.len(), "wrote program");
            println!(
                "{} words ({} bytes), sha256 {}",
                program.len(),
                program.byte_len(),
                hex_bytes(&program.digest()?).replace(' ', "")
            );
        }
        None => {
            for word in &program.code {
                println!("{:#014x}", word);
            }
        }
    }
    Ok(())
}

fn cmd_disasm(input: &Path, opts: FormatOptions) -> Result<()> {
    let program = load_binary(input)?;
    print!("{}", disassemble(&program, &opts));
    Ok(())
}

fn cmd_run(
    input: &Path,
    binary: bool,
    regs: &[(Register, i32)],
    max_steps: u64,
    trace: bool,
) -> Result<()> {
    let program = if binary {
        load_binary(input)?
    } else {
        load_source(input)?
    };

    let state = regs
        .iter()
        .fold(MachineState::new(), |state, &(reg, value)| state.with(reg, value));
    let config = MachineConfig {
        max_steps,
        collect_trace: trace,
    };

    let result = Machine::new(state, config)
        .run(&program)
        .context("Execution failed")?;

    for row in &result.trace {
        match row.value {
            Some(value) => println!(
                "[{:>4}] {:012x}  {} <- {:#010x}",
                row.index, row.word, row.rd, value as u32
            ),
            None => println!("[{:>4}] {:012x}  {} (discarded)", row.index, row.word, row.rd),
        }
    }

    println!("steps: {}", result.steps);
    for (reg, value) in result.state.non_zero() {
        println!("{:>4} = {:#010x} ({})", reg.to_string(), value as u32, value);
    }
    Ok(())
}

fn cmd_describe(mnemonic: Option<&str>) -> Result<()> {
    match mnemonic {
        Some(name) => {
            let format = lookup_mnemonic(name)
                .with_context(|| format!("Unknown instruction: {}", name))?;
            print!("{}", format.description());
        }
        None => {
            for format in FORMATS {
                print!("{}", format.description());
            }
        }
    }
    Ok(())
}

fn load_source(path: &Path) -> Result<Program> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let program =
        assemble(&source).with_context(|| format!("Failed to assemble {}", path.display()))?;
    debug!(words = program.len(), "loaded source");
    Ok(program)
}

fn load_binary(path: &Path) -> Result<Program> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let program =
        Program::from_bytes(&bytes).with_context(|| format!("Failed to load {}", path.display()))?;
    debug!(words = program.len(), "loaded binary");
    Ok(program)
}

fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a decimal, `0x` hex or `0b` binary integer, optionally negative
///
/// Uses the assembler's literal syntax, so the whole argument must be one
/// number token.
fn parse_int(text: &str) -> std::result::Result<i64, String> {
    let cleaned = text.trim().replace('_', "");
    let invalid = || format!("invalid integer `{}`", text);

    let mut lexer = Token::lexer(&cleaned);
    let value = match lexer.next() {
        Some(Ok(token)) if lexer.span() == (0..cleaned.len()) => {
            token.as_integer().ok_or_else(invalid)?
        }
        _ => return Err(invalid()),
    };
    if lexer.next().is_some() {
        return Err(invalid());
    }
    Ok(value)
}

/// Parse `REG=VALUE`; values up to `0xFFFFFFFF` are taken as raw 32-bit patterns
fn parse_assignment(text: &str) -> std::result::Result<(Register, i32), String> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| format!("expected REG=VALUE, found `{}`", text))?;
    let reg = Register::parse(name).ok_or_else(|| format!("invalid register `{}`", name))?;
    let value = parse_int(value)?;

    let value = if (i32::MIN as i64..=u32::MAX as i64).contains(&value) {
        value as u32 as i32
    } else {
        return Err(format!("value {} does not fit in 32 bits", value));
    };
    Ok((reg, value))
}
