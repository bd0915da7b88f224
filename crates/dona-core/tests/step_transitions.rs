use dona_core::{BlockReason, DonationFlow, InMemoryEventStore, InMemorySessionRepository, PaymentContext, Step, SubmitOutcome};
use dona_domain::{ErrorMap, FormField, FormInfo};

fn donor_form() -> FormInfo {
    FormInfo { amount: "100".into(),
               first_name: "Rosalind".into(),
               last_name: "Franklin".into(),
               email: "rosalind@example.org".into(),
               org_donate: false,
               org_name: String::new(),
               address1: "Kings College".into(),
               address2: String::new(),
               city: "London".into(),
               state: "LDN".into(),
               postal_code: "WC2R 2LS".into(),
               country: "GB".into() }
}

fn flow_with(form: FormInfo) -> DonationFlow<InMemoryEventStore, InMemorySessionRepository> {
    DonationFlow::builder(InMemoryEventStore::default(), InMemorySessionRepository::new()).client_secret("pi_test_secret")
                                                                                          .initial_form(form)
                                                                                          .build()
}

fn submit(flow: &mut DonationFlow<InMemoryEventStore, InMemorySessionRepository>) -> SubmitOutcome {
    tokio_test::block_on(flow.submit(&PaymentContext::empty())).expect("submit should not error")
}

#[test]
fn amount_boundaries() {
    for accepted in ["1", "999999.99", "25", " 10.5 "] {
        let mut flow = flow_with(FormInfo::default().with_amount(accepted));
        assert_eq!(submit(&mut flow), SubmitOutcome::Advanced { from: Step::Amount, to: Step::DonorInfo }, "{accepted:?}");
    }
    for rejected in ["0.99", "1000000.00", "abc", "", "0"] {
        let mut flow = flow_with(FormInfo::default().with_amount(rejected));
        let out = submit(&mut flow);
        assert!(matches!(out, SubmitOutcome::Blocked(BlockReason::InvalidAmount(_))), "{rejected:?} -> {out:?}");
        assert_eq!(flow.step(), Step::Amount);
    }
}

#[test]
fn amount_reads_leading_number() {
    for (raw, expected) in [("12abc", "12abc"), ("1,000", "1,000"), ("25 USD", "25 USD")] {
        let mut flow = flow_with(FormInfo::default().with_amount(raw));
        assert_eq!(submit(&mut flow), SubmitOutcome::Advanced { from: Step::Amount, to: Step::DonorInfo }, "{raw:?}");
        // el texto del formulario no se normaliza
        assert_eq!(flow.state().form().amount, expected);
    }
    let mut flow = flow_with(FormInfo::default().with_amount("0.5 EUR"));
    assert!(matches!(submit(&mut flow), SubmitOutcome::Blocked(BlockReason::InvalidAmount(_))));
}

#[test]
fn amount_rejection_is_silent_and_leaves_form_untouched() {
    let form = FormInfo::default().with_amount("0.99").with_email("x@y.co");
    let mut flow = flow_with(form.clone());
    submit(&mut flow);
    submit(&mut flow);
    assert_eq!(flow.state().form(), &form);
    assert_eq!(flow.state().errors(), &ErrorMap::new());
    assert_eq!(flow.state().error_message(), None);
    assert_eq!(flow.replay().amount_rejections, 2);
}

#[test]
fn step_one_advances_exactly_once_per_submit() {
    // el formulario del paso 2 queda incompleto para que el segundo submit no avance
    let mut flow = flow_with(FormInfo::default().with_amount("50"));
    assert_eq!(submit(&mut flow), SubmitOutcome::Advanced { from: Step::Amount, to: Step::DonorInfo });
    assert!(matches!(submit(&mut flow), SubmitOutcome::Blocked(BlockReason::InvalidFields(_))));
    assert_eq!(flow.step(), Step::DonorInfo);

    // volver y reenviar el mismo monto vuelve a avanzar sólo un paso
    assert_eq!(flow.go_back(), Step::Amount);
    assert_eq!(submit(&mut flow), SubmitOutcome::Advanced { from: Step::Amount, to: Step::DonorInfo });
    assert_ne!(flow.step(), Step::Payment);
}

#[test]
fn donor_info_city_scenario() {
    let mut flow = flow_with(donor_form().with_field(FormField::City, ""));
    submit(&mut flow);
    assert_eq!(flow.step(), Step::DonorInfo);

    let out = submit(&mut flow);
    assert_eq!(out, SubmitOutcome::Blocked(BlockReason::InvalidFields(vec![FormField::City])));
    let expected: ErrorMap = [FormField::City].into_iter().collect();
    assert_eq!(flow.state().errors(), &expected);
    assert_eq!(flow.step(), Step::DonorInfo);

    flow.state_mut().update_form(|f| f.clone().with_field(FormField::City, "London"));
    let out = submit(&mut flow);
    assert_eq!(out, SubmitOutcome::Advanced { from: Step::DonorInfo, to: Step::Payment });
    assert!(flow.state().errors().is_empty());
    assert_eq!(flow.step(), Step::Payment);
}

#[test]
fn donor_info_merge_keeps_previous_keys_until_full_pass() {
    let mut flow = flow_with(donor_form().with_field(FormField::City, "").with_email(""));
    submit(&mut flow);
    submit(&mut flow);
    assert_eq!(flow.state().errors().flagged_fields(), vec![FormField::Email, FormField::City]);

    // corrige sólo el email: la marca de city sigue, email queda del pase anterior
    flow.state_mut().update_form(|f| f.clone().with_email("ok@example.org"));
    let out = submit(&mut flow);
    assert_eq!(out, SubmitOutcome::Blocked(BlockReason::InvalidFields(vec![FormField::City])));
    assert!(flow.state().errors().contains(FormField::Email));
    assert!(flow.state().errors().is_flagged(FormField::City));

    flow.state_mut().update_form(|f| f.clone().with_field(FormField::City, "London"));
    assert!(submit(&mut flow).advanced());
    assert!(flow.state().errors().is_empty());
}

#[test]
fn org_name_required_only_for_org_donations() {
    let mut flow = flow_with(donor_form().with_org(true, "  "));
    submit(&mut flow);
    assert_eq!(submit(&mut flow), SubmitOutcome::Blocked(BlockReason::InvalidFields(vec![FormField::OrgName])));

    flow.state_mut().update_form(|f| f.clone().with_org(false, ""));
    assert!(submit(&mut flow).advanced());
}

#[test]
fn edited_field_lowers_flag_without_clearing_map() {
    let mut flow = flow_with(donor_form().with_email("bad"));
    submit(&mut flow);
    submit(&mut flow);
    assert!(flow.state().errors().is_flagged(FormField::Email));

    flow.state_mut().mark_field_edited(FormField::Email);
    assert_eq!(flow.state().errors().get(FormField::Email), Some(false));
    assert_eq!(flow.step(), Step::DonorInfo);
}

#[test]
fn replay_matches_live_step() {
    let mut flow = flow_with(donor_form().with_field(FormField::Country, ""));
    submit(&mut flow);
    submit(&mut flow);
    flow.state_mut().update_form(|f| f.clone().with_field(FormField::Country, "GB"));
    submit(&mut flow);

    let snap = flow.replay();
    assert_eq!(snap.step, flow.step());
    assert_eq!(snap.validation_failures, 1);
    assert!(!snap.completed);
    assert_eq!(flow.event_variants(), vec!["I", "A", "V", "A"]);
}
