#![no_main]

use libfuzzer_sys::fuzz_target;
use prettytuple::{ConstructionOptions, Value, synthesize};

fuzz_target!(|data: &[u8]| {
    // First byte: rename flag and default count. Rest: NUL-separated names, the first one being the type name.
    let Some((&control, rest)) = data.split_first() else { return };
    let Ok(text) = std::str::from_utf8(rest) else { return };
    let mut names = text.split('\0');
    let type_name = names.next().unwrap_or("");
    let fields: Vec<&str> = names.collect();

    let default_count = usize::from(control >> 1);
    let options = ConstructionOptions::new()
        .with_rename(control & 1 == 1)
        .with_defaults((0..default_count).map(|i| Value::Int(i as i64)).collect());

    if let Ok(ty) = synthesize(type_name, &fields, &Default::default(), &Default::default(), None, options) {
        // A defined type must accept exactly one value per field.
        let values = (0..ty.fields().len()).map(|i| Value::Int(i as i64));
        assert!(ty.make(values).is_ok());
    }
});
