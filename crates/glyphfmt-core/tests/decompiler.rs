//! Tests for decompiler selection and signature printing

use glyphfmt_core::decompiler::{
    select_decompiler, Decompiler, DecompilerService, DecompilerSource, SignaturePrinter, SimplePrinterFlags, StaticDecompilerService,
};
use glyphfmt_core::text::{ClassifiedText, TextColor, TextColorWriter};
use glyphfmt_core::types::{MethodRef, MethodToken, ModuleId, ModuleTokenId, ParameterRef};

struct Tagged(&'static str);

impl Decompiler for Tagged
{
    fn name(&self) -> &str
    {
        self.0
    }

    fn write_method(&self, output: &mut dyn TextColorWriter, _method: &MethodRef, _flags: SimplePrinterFlags)
    {
        output.write(TextColor::Text, self.0);
    }
}

fn id() -> ModuleTokenId
{
    ModuleTokenId::new(ModuleId::new("App.dll"), MethodToken::new(0x0600_0003))
}

fn print(method: &MethodRef, flags: SimplePrinterFlags) -> String
{
    let mut out = ClassifiedText::new();
    SignaturePrinter.write_method(&mut out, method, flags);
    out.text()
}

#[test]
fn test_tab_decompiler_wins()
{
    let service = StaticDecompilerService::new(Tagged("service"));
    let tab = Tagged("tab");

    let (decompiler, source) = select_decompiler(Some(&tab), &service);
    assert_eq!(decompiler.name(), "tab");
    assert_eq!(source, DecompilerSource::Tab);
}

#[test]
fn test_service_default_fallback()
{
    let service = StaticDecompilerService::new(Tagged("service"));

    let (decompiler, source) = select_decompiler(None, &service);
    assert_eq!(decompiler.name(), "service");
    assert_eq!(source, DecompilerSource::ServiceDefault);
}

#[test]
fn test_default_service_uses_signature_printer()
{
    let service = StaticDecompilerService::default();
    assert_eq!(service.default_decompiler().name(), "C#");
}

#[test]
fn test_default_flags()
{
    assert_eq!(SimplePrinterFlags::default(), SimplePrinterFlags::DEFAULT);
    assert!(SimplePrinterFlags::DEFAULT.contains(SimplePrinterFlags::SHOW_PARAMETER_NAMES | SimplePrinterFlags::SHOW_OWNER_TYPES));
}

#[test]
fn test_signature_default_flags()
{
    let method = MethodRef::new(id(), "App.Services", "Worker", "Process")
        .with_parameter(ParameterRef::new("System.String", Some("name".to_string())))
        .with_parameter(ParameterRef::new("App.Model.Item[]", Some("items".to_string())))
        .with_return_type("System.Boolean");

    assert_eq!(print(&method, SimplePrinterFlags::DEFAULT), "bool App.Services.Worker.Process(string name, App.Model.Item[] items)");
}

#[test]
fn test_signature_without_namespaces_or_keywords()
{
    let method = MethodRef::new(id(), "App.Services", "Worker", "Process")
        .with_parameter(ParameterRef::new("System.String", Some("name".to_string())))
        .with_return_type("System.Boolean");
    let flags = SimplePrinterFlags::SHOW_PARAMETER_TYPES | SimplePrinterFlags::SHOW_OWNER_TYPES | SimplePrinterFlags::SHOW_RETURN_TYPES;

    assert_eq!(print(&method, flags), "Boolean Worker.Process(String)");
}

#[test]
fn test_signature_names_only()
{
    let method = MethodRef::new(id(), "App", "Worker", "Process")
        .with_parameter(ParameterRef::new("System.Int32", Some("a".to_string())))
        .with_parameter(ParameterRef::new("System.Int32", None))
        .with_return_type("System.Void");

    assert_eq!(print(&method, SimplePrinterFlags::SHOW_PARAMETER_NAMES), "Process(a, )");
}

#[test]
fn test_signature_constructor_uses_type_name()
{
    let method = MethodRef::new(id(), "App", "Outer.Inner", ".ctor").with_parameter(ParameterRef::new("System.Object", Some("state".to_string())));

    assert_eq!(print(&method, SimplePrinterFlags::DEFAULT), "App.Outer.Inner.Inner(object state)");
}

#[test]
fn test_signature_generic_and_multidimensional_types()
{
    let method = MethodRef::new(id(), "App", "Program", "Run")
        .with_parameter(ParameterRef::new("System.Collections.Generic.List`1<System.Int32>", Some("xs".to_string())))
        .with_parameter(ParameterRef::new("System.Int32[,]", Some("grid".to_string())));
    let flags = SimplePrinterFlags::SHOW_PARAMETER_TYPES | SimplePrinterFlags::SHOW_PARAMETER_NAMES;

    assert_eq!(print(&method, flags), "Run(List<Int32> xs, Int32[,] grid)");
    assert_eq!(
        print(&method, SimplePrinterFlags::DEFAULT),
        "App.Program.Run(System.Collections.Generic.List<int> xs, int[,] grid)"
    );
}

#[test]
fn test_signature_nested_generic_arguments()
{
    let method = MethodRef::new(id(), "App", "Cache", "Load")
        .with_parameter(ParameterRef::new(
            "System.Collections.Generic.Dictionary`2<System.String,System.Collections.Generic.List`1<System.Int64[]>>[]",
            Some("maps".to_string()),
        ))
        .with_parameter(ParameterRef::new("System.Byte*", Some("buffer".to_string())))
        .with_return_type("System.Threading.Tasks.Task`1<System.Boolean>");
    let flags = SimplePrinterFlags::DEFAULT - SimplePrinterFlags::SHOW_NAMESPACES;

    assert_eq!(print(&method, flags), "Task<bool> Cache.Load(Dictionary<string, List<long[]>>[] maps, byte* buffer)");
}

#[test]
fn test_signature_classification()
{
    let method = MethodRef::new(id(), "App", "Program", "Main").with_return_type("System.Void");
    let mut out = ClassifiedText::new();
    SignaturePrinter.write_method(&mut out, &method, SimplePrinterFlags::DEFAULT);

    let colors: Vec<TextColor> = out.segments().iter().map(|(color, _)| *color).collect();
    assert_eq!(
        colors,
        [
            TextColor::Keyword,
            TextColor::Text,
            TextColor::Namespace,
            TextColor::Punctuation,
            TextColor::Type,
            TextColor::Punctuation,
            TextColor::Method,
            TextColor::Punctuation,
            TextColor::Punctuation,
        ]
    );
}
