use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rivet_codegen::{InstantiationProvider, MultiStatement, RegistrationGenerator};
use rivet_hints::RuntimeHints;
use rivet_model::{
    ClassDescriptor, ComponentDefinition, Creator, MethodDescriptor, PropertyDescriptor,
    TypeDescriptor, TypeModel, Value, SCOPE_PROTOTYPE,
};

struct StubProvider {
    creator: Creator,
}

impl InstantiationProvider for StubProvider {
    fn creator(&self) -> &Creator {
        &self.creator
    }

    fn instantiation(&self, _hints: &mut RuntimeHints) -> MultiStatement {
        let mut statements = MultiStatement::new();
        statements.add_statement("UserService::new(repo)");
        statements
    }
}

fn rich_definition() -> ComponentDefinition {
    let mut def = ComponentDefinition::new(TypeDescriptor::named("app::UserService"));
    def.set_scope(SCOPE_PROTOTYPE);
    def.set_primary(true);
    def.set_lazy_init(true);
    def.set_depends_on(vec!["audit".to_string(), "metrics".to_string()]);
    def.add_init_method("init");
    def.add_destroy_method("shutdown");
    def.add_constructor_arg(0, Value::string("alpha"));
    def.add_constructor_arg(1, Value::Int(42));
    def.add_property("name", Value::string("Ada"));
    def.add_property("limit", Value::Int(3));
    def
}

fn model() -> TypeModel {
    let mut class = ClassDescriptor::new("app::UserService");
    class.add_method(MethodDescriptor::new("init"));
    class.add_method(MethodDescriptor::new("shutdown"));
    class.add_property(PropertyDescriptor::writable("name", "set_name"));
    class.add_property(PropertyDescriptor::writable("limit", "set_limit"));
    let mut model = TypeModel::new();
    model.add_class(class);
    model
}

fn bench_generate_registration(c: &mut Criterion) {
    let def = rich_definition();
    let model = model();
    let provider = StubProvider {
        creator: Creator::constructor(
            "app::UserService",
            vec![TypeDescriptor::named("app::UserRepository")],
        ),
    };

    c.bench_function("generate_registration", |b| {
        b.iter(|| {
            let mut hints = RuntimeHints::new();
            let generator =
                RegistrationGenerator::new("userService", black_box(&def), &model, &provider);
            generator.register_runtime_hints(&mut hints);
            generator.generate_registration(&mut hints).unwrap()
        });
    });
}

criterion_group!(benches, bench_generate_registration);
criterion_main!(benches);
