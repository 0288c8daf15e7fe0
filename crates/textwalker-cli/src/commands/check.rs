use textwalker_lib::compile;

pub struct CheckArgs {
    pub pattern: String,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    if let Err(e) = compile(&args.pattern) {
        eprintln!("{}", e.render(args.color));
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
