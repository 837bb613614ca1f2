use cronview::decode_strict;

fn main() {
    let expressions = [
        "0 9 * * *",
        "30 14 15 * ?",
        "*/15 * * * *",
        "61 9 * * *",
        "0 9 * *",
        "0 0 15 * 2",
    ];

    for expression in expressions {
        match decode_strict(expression) {
            Ok(_) => println!("✅ {expression}"),
            Err(error) => println!("❌ {expression}: {error}"),
        }
    }
}
