use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use glyphfmt_core::decompiler::{SignaturePrinter, StaticDecompilerService};
use glyphfmt_core::error::{parse_u32, parse_u64, GlyphError, GlyphResult};
use glyphfmt_core::glyph::{BreakpointGlyphFormatter, GlyphFormatterRegistry, NativeCodeGlyphFormatter};
use glyphfmt_core::text::ClassifiedText;
use glyphfmt_core::types::{
    Address, BreakpointLocation, CursorPosition, IlOffsetMapping, MethodRef, MethodToken, ModuleId, NativeCodeLocation, ParameterRef,
    TextSnapshot,
};
use glyphfmt_core::viewer::{DecompiledTextView, MethodStatement, PlainTextView, StatementMap, TextView};
use glyphfmt_utils::{debug, init_logging};

/// Describe native code breakpoint locations the way a breakpoint glyph tooltip does.
#[derive(Parser, Debug)]
#[command(name = "glyphfmt")]
#[command(version)]
#[command(about = "Describe native code breakpoint locations", long_about = None)]
struct Cli
{
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands
{
    /// Format a native code breakpoint location
    Describe(DescribeArgs),
    /// List the IL offset mapping kinds and their raw codes
    Mappings,
}

#[derive(Args, Debug)]
struct DescribeArgs
{
    /// Module defining the method
    #[arg(long, default_value = "module.dll")]
    module: String,
    /// Method token (hex or decimal)
    #[arg(long, default_value = "0x06000001", value_parser = parse_u32)]
    token: u32,
    /// IL offset (hex or decimal)
    #[arg(long, default_value = "0", value_parser = parse_u32)]
    il_offset: u32,
    /// IL offset mapping: name (exact, approximate, prolog, epilog, unknown, no-info, unmapped-address) or raw code
    #[arg(long, default_value = "exact")]
    mapping: IlOffsetMapping,
    /// Native method base address (hex or decimal)
    #[arg(long, value_parser = parse_u64)]
    base: u64,
    /// Offset of the breakpoint from the method base
    #[arg(long, default_value = "0", value_parser = parse_u64)]
    native_offset: u64,

    /// 0-based line of the glyph
    #[arg(long, default_value_t = 0, conflicts_with = "source")]
    line: usize,
    /// 0-based character within the line
    #[arg(long, default_value_t = 0, conflicts_with = "source")]
    column: usize,
    /// Source file to locate `--offset` in
    #[arg(long, requires = "offset")]
    source: Option<PathBuf>,
    /// Character offset of the glyph within `--source`
    #[arg(long, requires = "source")]
    offset: Option<usize>,

    #[command(flatten)]
    method: MethodArgs,

    /// Print one `color<TAB>text` line per segment
    #[arg(long, default_value_t = false)]
    segments: bool,
}

/// Method shown in a decompiled view; when `--method` is absent no view is bound
#[derive(Args, Debug)]
struct MethodArgs
{
    /// Name of the method owning the statement at the IL offset
    #[arg(long)]
    method: Option<String>,
    /// Declaring type of the method
    #[arg(long = "type", default_value = "Program")]
    declaring_type: String,
    /// Namespace of the declaring type
    #[arg(long, default_value = "")]
    namespace: String,
    /// Parameter as TYPE or TYPE:NAME, repeatable
    #[arg(long = "param", requires = "method")]
    params: Vec<String>,
    /// Full return type name
    #[arg(long, requires = "method")]
    returns: Option<String>,
}

fn main()
{
    let _logging = match init_logging() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(1);
        }
    };

    let cli = Cli::parse();

    if let Err(e) = run_command(cli, &mut io::stdout().lock()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(cli: Cli, out: &mut impl Write) -> GlyphResult<()>
{
    match cli.command {
        Commands::Describe(args) => describe(&args, out),
        Commands::Mappings => {
            for mapping in IlOffsetMapping::ALL {
                writeln!(out, "{}\t{}", mapping.raw(), mapping)?;
            }
            Ok(())
        }
    }
}

fn describe(args: &DescribeArgs, out: &mut impl Write) -> GlyphResult<()>
{
    let location = NativeCodeLocation {
        module: ModuleId::new(args.module.as_str()),
        token: MethodToken::new(args.token),
        il_offset: args.il_offset,
        il_offset_mapping: args.mapping,
        native_method_address: Address::new(args.base),
        native_method_offset: args.native_offset,
    };

    let position = match (&args.source, args.offset) {
        (Some(path), Some(offset)) => {
            let text = std::fs::read_to_string(path)?;
            TextSnapshot::new(&text).position_at(offset)?
        }
        _ => CursorPosition::new(args.line, args.column),
    };
    debug!(?position, mapping = %args.mapping, "Describing native code location");

    let view: Box<dyn TextView> = match &args.method.method {
        Some(name) => {
            let mut method = MethodRef::new(location.method_id(), args.method.namespace.as_str(), args.method.declaring_type.as_str(), name.as_str());
            for param in &args.method.params {
                method = method.with_parameter(parse_param(param)?);
            }
            if let Some(returns) = &args.method.returns {
                method = method.with_return_type(returns.as_str());
            }
            let mut document = StatementMap::new().with_decompiler(SignaturePrinter);
            document.insert(MethodStatement {
                method,
                il_span: 0..=u32::MAX,
            });
            Box::new(DecompiledTextView::new(document))
        }
        None => Box::new(PlainTextView),
    };

    let mut registry = GlyphFormatterRegistry::new();
    registry.register(NativeCodeGlyphFormatter::new(StaticDecompilerService::default()));

    let mut output = ClassifiedText::new();
    let location = BreakpointLocation::NativeCode(location);
    let handled = registry.write_location(&mut output, &location, view.as_ref(), position);
    debug!(handled, segments = output.segments().len(), "Formatted location");

    if args.segments {
        for (color, text) in output.segments() {
            writeln!(out, "{color}\t{text}")?;
        }
    } else {
        writeln!(out, "{output}")?;
    }
    Ok(())
}

/// `System.Int32:count` or `System.Int32`
fn parse_param(text: &str) -> GlyphResult<ParameterRef>
{
    let (type_name, name) = match text.split_once(':') {
        Some((type_name, name)) => (type_name.trim(), Some(name.trim().to_string()).filter(|n| !n.is_empty())),
        None => (text.trim(), None),
    };
    if type_name.is_empty() {
        return Err(GlyphError::InvalidArgument(format!("parameter without a type: {text}")));
    }
    Ok(ParameterRef::new(type_name, name))
}
