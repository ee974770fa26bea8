use pdfform as pdf;
use pdf::form::{flags, AcroForm};
use pdf::{Context, Dict, Name, Object};

fn main() -> Result<(), pdf::Error> {
    stderrlog::new()
        .verbosity(log::Level::Trace)
        .init()
        .unwrap();

    let mut ctx = Context::new();
    let form = sample_form(&mut ctx);

    let agree = AcroForm::new(&form, &ctx)
        .field_by_name("agree")
        .and_then(|(objref, _)| objref);
    if let Some(objref) = agree {
        ctx.with_field_mut(objref, |field| {
            field.set_read_only(true);
            field.set_value(Object::new_name(b"Yes"));
        })?;
    }

    for (objref, field) in AcroForm::new(&form, &ctx).all_fields() {
        let name = field.fully_qualified_name().unwrap_or_default();
        let tpe = field.field_type().map(|tpe| tpe.to_string()).unwrap_or_else(|| "-".into());
        let value = field.v().map(Object::to_string).unwrap_or_else(|| "-".into());
        let at = objref.map(|r| r.to_string()).unwrap_or_else(|| "inline".into());
        println!("{name} [{at}] {:?} {tpe} flags={:#b} value={value}", field.kind(), field.get_flags());
        if field.has_flag(flags::text::MULTILINE) {
            println!("  multiline");
        }
    }

    for (objref, obj) in ctx.objects() {
        println!("{objref}: {obj}");
    }

    Ok(())
}

fn sample_form(ctx: &mut Context) -> Dict {
    let person = ctx.next_ref();
    let name = ctx.register(Object::Dict(Dict::from(vec![
        (Name::from(b"FT"), Object::new_name(b"Tx")),
        (Name::from(b"T"), Object::new_string(b"name")),
        (Name::from(b"Parent"), Object::Ref(person)),
        (Name::from(b"V"), Object::new_string(b"Jane")),
    ])));
    let address = ctx.register(Object::Dict(Dict::from(vec![
        (Name::from(b"FT"), Object::new_name(b"Tx")),
        (Name::from(b"T"), Object::new_string(b"address")),
        (Name::from(b"Parent"), Object::Ref(person)),
        (Name::from(b"Ff"), Object::from(1 << flags::text::MULTILINE | 1 << flags::REQUIRED)),
    ])));
    ctx.assign(person, Object::Dict(Dict::from(vec![
        (Name::from(b"T"), Object::new_string(b"person")),
        (Name::from(b"Ff"), Object::from(1 << flags::REQUIRED)),
        (Name::from(b"Kids"), Object::Array(vec![Object::Ref(name), Object::Ref(address)])),
    ])));
    let agree = ctx.register(Object::Dict(Dict::from(vec![
        (Name::from(b"FT"), Object::new_name(b"Btn")),
        (Name::from(b"T"), Object::new_string(b"agree")),
        (Name::from(b"DV"), Object::new_name(b"Off")),
    ])));
    Dict::from(vec![
        (Name::from(b"Fields"), Object::Array(vec![Object::Ref(person), Object::Ref(agree)])),
        (Name::from(b"DA"), Object::new_string(b"/Helv 0 Tf 0 g")),
    ])
}
