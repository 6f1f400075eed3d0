//! Builders rendered headlessly and driven like a user would

use bindery_core::widget::props;
use bindery_forms::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
struct Survey {
    subscribed: bool,
    agree: bool,
    starred: bool,
    fruit: String,
    score: i32,
    budget: (f64, f64),
    name: String,
    favourite: String,
    toppings: Vec<String>,
    days: Vec<usize>,
    size: usize,
}

fn survey() -> Host<Survey> {
    Host::new(Survey {
        fruit: "b".into(),
        ..Default::default()
    })
}

#[test]
fn boolean_widgets_flip_to_negation() {
    let host = survey();
    let form = Form::new(host.clone());
    let mut renderer = HeadlessRenderer::new();
    let render = |renderer: &mut HeadlessRenderer| {
        renderer.render(form.column([
            form.switch("Subscribe", &lens!(Survey, subscribed), SwitchOptions::default()),
            form.checkbox("Agree", &lens!(Survey, agree), CheckboxOptions::default()),
            form.toggle_button("Star", &lens!(Survey, starred), ToggleButtonOptions::default()),
        ]));
    };

    render(&mut renderer);
    for kind in [WidgetKind::ListItem, WidgetKind::Checkbox, WidgetKind::IconButton] {
        let id = renderer.find_one(kind).unwrap();
        renderer.click(id).unwrap();
    }
    assert_eq!(
        host.read(|s| (s.subscribed, s.agree, s.starred)),
        (true, true, true)
    );

    render(&mut renderer);
    for kind in [WidgetKind::ListItem, WidgetKind::Checkbox, WidgetKind::IconButton] {
        let id = renderer.find_one(kind).unwrap();
        renderer.click(id).unwrap();
    }
    assert_eq!(
        host.read(|s| (s.subscribed, s.agree, s.starred)),
        (false, false, false)
    );
}

#[test]
fn switch_row_toggles_repeatedly_without_rerender() {
    let host = survey();
    let mut renderer = HeadlessRenderer::new();
    renderer.render(switch(
        "Subscribe",
        &host,
        &lens!(Survey, subscribed),
        SwitchOptions::default(),
    ));
    let row = renderer.find_one(WidgetKind::ListItem).unwrap();

    renderer.click(row).unwrap();
    renderer.click(row).unwrap();
    renderer.click(row).unwrap();
    assert!(host.read(|s| s.subscribed));
}

#[test]
fn rerender_with_same_state_is_idempotent() {
    let host = survey();
    let form = Form::new(host.clone());
    let build = || {
        form.column([
            form.switch("Subscribe", &lens!(Survey, subscribed), SwitchOptions::default()),
            form.select("Fruit", &lens!(Survey, fruit), ["a", "b", "c"], SelectOptions::default()),
            form.text_field("Name*", &lens!(Survey, name), TextFieldOptions::default()),
        ])
    };

    let mut renderer = HeadlessRenderer::new();
    renderer.render(build());
    let first = renderer.snapshot();
    renderer.render(build());
    assert_eq!(first, renderer.snapshot());
    assert_eq!(host.revision(), 0);
}

#[test]
fn select_shows_index_and_writes_label() {
    let host = survey();
    let mut renderer = HeadlessRenderer::new();
    renderer.render(select(
        "Fruit",
        &host,
        &lens!(Survey, fruit),
        ["a", "b", "c"],
        SelectOptions::default(),
    ));

    let id = renderer.find_one(WidgetKind::Select).unwrap();
    assert_eq!(renderer.prop(id, props::SELECTED_INDEX), Some(Value::Number(1.0)));

    renderer.choose(id, 2).unwrap();
    assert_eq!(host.read(|s| s.fruit.clone()), "c");
}

#[test]
fn slider_commits_value() {
    let host = survey();
    let mut renderer = HeadlessRenderer::new();
    renderer.render(slider(
        "Score",
        &host,
        &lens!(Survey, score),
        SliderOptions::default()
            .range(0.0, 10.0)
            .step(1.0)
            .trigger(SliderTrigger::Change),
    ));

    let id = renderer.find_one(WidgetKind::Slider).unwrap();
    renderer.slide(id, 7.0).unwrap();
    assert_eq!(host.read(|s| s.score), 0);
    renderer.release(id).unwrap();
    assert_eq!(host.read(|s| s.score), 7);
}

#[test]
fn range_slider_commits_ordered_pair() {
    let host = survey();
    let mut renderer = HeadlessRenderer::new();
    renderer.render(range_slider(
        "Budget",
        &host,
        &lens!(Survey, budget),
        SliderOptions::default().range(0.0, 100.0),
    ));

    let id = renderer.find_one(WidgetKind::Slider).unwrap();
    assert!(renderer.flag(id, props::RANGE));
    renderer.slide_range(id, 80.0, 20.0).unwrap();

    let (start, end) = host.read(|s| s.budget);
    assert!(start <= end);
    assert_eq!((start, end), (20.0, 80.0));
}

#[test]
fn filter_only_one_writes_single_value() {
    let host = survey();
    let mut renderer = HeadlessRenderer::new();
    renderer.render(filter(
        "Favourite",
        &host,
        &lens!(Survey, favourite),
        ["apple", "pear", "plum"],
        FilterOptions::default().mode(FilterMode::OnlyOne),
    ));
    let chips = renderer.find(WidgetKind::FilterChip);
    assert_eq!(chips.len(), 3);

    renderer.click(chips[0]).unwrap();
    renderer.click(chips[1]).unwrap();

    let selected: Vec<bool> = chips.iter().map(|c| renderer.flag(*c, props::SELECTED)).collect();
    assert_eq!(selected, vec![false, true, false]);
    assert_eq!(host.read(|s| s.favourite.clone()), "pear");

    // clicking the selected chip again keeps it selected
    renderer.click(chips[1]).unwrap();
    assert!(renderer.flag(chips[1], props::SELECTED));
    assert_eq!(host.read(|s| s.favourite.clone()), "pear");
}

#[test]
fn filter_one_or_more_refuses_last_deselect() {
    let host = Host::new(Survey {
        toppings: vec!["ham".into()],
        ..Default::default()
    });
    let mut renderer = HeadlessRenderer::new();
    renderer.render(filter(
        "Toppings",
        &host,
        &lens!(Survey, toppings),
        ["cheese", "ham", "olives"],
        FilterOptions::default().mode(FilterMode::OneOrMore),
    ));
    let chips = renderer.find(WidgetKind::FilterChip);
    assert!(renderer.flag(chips[1], props::SELECTED));

    renderer.click(chips[1]).unwrap();
    assert!(renderer.flag(chips[1], props::SELECTED));
    assert_eq!(host.read(|s| s.toppings.clone()), vec!["ham".to_string()]);
    assert!(!host.is_dirty());

    renderer.click(chips[2]).unwrap();
    assert_eq!(
        host.read(|s| s.toppings.clone()),
        vec!["ham".to_string(), "olives".to_string()]
    );
}

#[test]
fn filter_zero_or_more_by_index() {
    let host = Host::new(Survey {
        days: vec![0, 2],
        ..Default::default()
    });
    let mut renderer = HeadlessRenderer::new();
    renderer.render(filter(
        "Days",
        &host,
        &lens!(Survey, days),
        ["Mon", "Tue", "Wed"],
        FilterOptions::default().kind(FilterKind::Number),
    ));
    let chips = renderer.find(WidgetKind::FilterChip);

    renderer.click(chips[0]).unwrap();
    assert_eq!(host.read(|s| s.days.clone()), vec![2]);
    renderer.click(chips[1]).unwrap();
    assert_eq!(host.read(|s| s.days.clone()), vec![1, 2]);
}

#[test]
fn filter_ignores_clicks_between_chips() {
    let host = survey();
    let mut renderer = HeadlessRenderer::new();
    renderer.render(filter(
        "Size",
        &host,
        &lens!(Survey, size),
        ["S", "M"],
        FilterOptions::default()
            .kind(FilterKind::Number)
            .mode(FilterMode::OnlyOne),
    ));

    let set = renderer.find_one(WidgetKind::ChipSet).unwrap();
    renderer.click(set).unwrap();
    assert!(!host.is_dirty());

    let chips = renderer.find(WidgetKind::FilterChip);
    renderer.click(chips[1]).unwrap();
    assert_eq!(host.read(|s| s.size), 1);
}

#[test]
fn text_field_label_marker() {
    let host = survey();
    let mut renderer = HeadlessRenderer::new();
    renderer.render(field("Profile").child(text_field(
        "Name*",
        &host,
        &lens!(Survey, name),
        TextFieldOptions::default(),
    )));

    let id = renderer.find_one(WidgetKind::TextField).unwrap();
    assert_eq!(renderer.prop(id, props::LABEL), Some("Name".into()));
    assert!(renderer.flag(id, props::REQUIRED));

    renderer.render(text_field(
        "Name",
        &host,
        &lens!(Survey, name),
        TextFieldOptions::default(),
    ));
    let id = renderer.find_one(WidgetKind::TextField).unwrap();
    assert!(!renderer.flag(id, props::REQUIRED));

    renderer.render(text_field(
        "Name",
        &host,
        &lens!(Survey, name),
        TextFieldOptions::default().required(true),
    ));
    let id = renderer.find_one(WidgetKind::TextField).unwrap();
    assert!(renderer.flag(id, props::REQUIRED));
}

#[test]
fn chip_select_commits_menu_choice() {
    let host = survey();
    let mut renderer = HeadlessRenderer::new();
    renderer.render(chip_select(
        "Fruit",
        &host,
        &lens!(Survey, fruit),
        ["a", "b", "c"],
        ChipSelectOptions::default(),
    ));

    let chip = renderer.find_one(WidgetKind::AssistChip).unwrap();
    let menu = renderer.find_one(WidgetKind::Menu).unwrap();
    assert_eq!(renderer.prop(chip, props::LABEL), Some("b".into()));

    renderer.click(chip).unwrap();
    renderer.choose_menu_item(menu, 0).unwrap();
    assert_eq!(host.read(|s| s.fruit.clone()), "a");
}

#[test]
fn input_builder_is_unimplemented() {
    let host = survey();
    let result = input("Name", &host, &lens!(Survey, name), InputOptions::default());
    assert!(matches!(result, Err(BindError::NotImplemented(_))));
}

#[test]
fn options_load_from_text() {
    let slider: SliderOptions =
        bindery_core::options_from_toml("min = 0.0\nmax = 10.0\ntimeoutMs = 50\n").unwrap();
    assert_eq!((slider.min, slider.max, slider.step), (0.0, 10.0, 1.0));
    assert_eq!(slider.timeout_ms, 50);

    let text: TextFieldOptions =
        bindery_core::options_from_json(r#"{ "type": "email", "reset": true }"#).unwrap();
    assert_eq!(text.input_type, "email");
    assert!(text.reset);
    assert_eq!(text.variant, TextFieldVariant::Filled);
}
