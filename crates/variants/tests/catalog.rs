//! `seal_all` touches every cataloged registry in the process, and every
//! registry cataloged after it, so the whole lifecycle runs as one test in its
//! own binary.

use morph_variants::{Decision, Registry, RegistryError, Variant, catalog, variant};

struct Page;
struct Layout;
struct AdminPage;
struct Card;
struct Late;
struct LateAdmin;

variant!(Page, args = bool);
variant!(Layout, args = ());
variant!(Card, args = u8);
variant!(Late, args = ());

#[test]
fn seal_all_closes_every_declared_registry() {
	let _ = tracing_subscriber::fmt::try_init();

	assert!(!catalog::is_declared(Page::variant_type()));
	Page::build(|admin: &bool| {
		if *admin { Decision::to::<AdminPage>() } else { Decision::NoMatch }
	})
	.unwrap();
	let _ = Layout::registry();

	// A hand-built registry sharing Card's base must not hide Card's own.
	let stand_in: &'static Registry<u8> = Box::leak(Box::new(Registry::new(Card::variant_type())));
	assert!(catalog::register(stand_in));
	Card::build(|_: &u8| Decision::NoMatch).unwrap();

	let declared = catalog::declared();
	assert_eq!(
		declared,
		vec![Page::variant_type(), Layout::variant_type(), Card::variant_type()]
	);
	assert_eq!(
		catalog::get(Page::variant_type()).map(|r| r.decider_count()),
		Some(1)
	);

	assert_eq!(catalog::seal_all(), 4);
	assert_eq!(catalog::seal_all(), 0);
	assert!(Page::registry().is_sealed());
	assert!(Layout::registry().is_sealed());
	assert!(stand_in.is_sealed());
	assert!(Card::registry().is_sealed());
	assert!(catalog::get(Card::variant_type()).is_some_and(|r| r.is_sealed()));

	let err = Layout::build(|_: &()| Decision::NoMatch).unwrap_err();
	assert!(matches!(err, RegistryError::Sealed { .. }));
	let err = Card::build(|_: &u8| Decision::NoMatch).unwrap_err();
	assert!(matches!(err, RegistryError::Sealed { .. }));
	assert!(Page::resolve(&true).unwrap().is::<AdminPage>());

	// Late was declared but never touched before seal_all.
	let err = Late::build(|_: &()| Decision::to::<LateAdmin>()).unwrap_err();
	assert!(matches!(err, RegistryError::Sealed { base } if base == Late::variant_type()));
	assert!(Late::registry().is_sealed());
	assert!(catalog::is_declared(Late::variant_type()));
	assert!(Late::resolve(&()).unwrap().is::<Late>());
}
