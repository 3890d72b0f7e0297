use kotfild_registry_gen::{BuildCtx, GeneratorConfig, OutDir, SourceTree, UniqueMemberGenerator};

fn main() {
	let _ = tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.without_time()
		.with_target(false)
		.try_init();

	let ctx = BuildCtx::new();
	ctx.declare_cfgs();
	ctx.rerun_if_changed(&ctx.asset("build.rs"));
	ctx.rerun_tree(&ctx.asset("src"));

	let source = SourceTree::new(ctx.asset("src/lib.rs"));
	let mut sink = OutDir::new(&ctx.out_dir);
	let mut generator = UniqueMemberGenerator::new(GeneratorConfig::default());

	let generation = generator.process(&source, &mut sink);
	ctx.publish(&generation);
}
