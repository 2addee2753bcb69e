use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(form: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let hx_post = form
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        hx_post, endpoint,
        "want form with attribute {attribute}=\"{endpoint}\", got {hx_post:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    for input in form.select(&Selector::parse("input").unwrap()) {
        let input_name = input.value().attr("name").unwrap_or_default();

        if input_name == name {
            let input_type = input.value().attr("type").unwrap_or_default();
            let input_required = input.value().attr("required");

            assert_eq!(
                input_type, type_,
                "want input with type \"{type_}\", got {input_type:?}"
            );

            assert!(
                input_required.is_some(),
                "want input with name {name} to have the required attribute but got none"
            );

            return;
        }
    }

    panic!("No input found with name \"{name}\" and type \"{type_}\"");
}

/// Asserts that the form has one radio button per value in `values`, in order,
/// and that only `checked` is selected.
#[track_caller]
pub(crate) fn assert_form_radio(form: &ElementRef<'_>, name: &str, values: &[&str], checked: &str) {
    let selector = Selector::parse(&format!("input[type=radio][name={name}]")).unwrap();
    let radios = form.select(&selector).collect::<Vec<_>>();

    let got_values = radios
        .iter()
        .map(|radio| radio.value().attr("value").unwrap_or_default())
        .collect::<Vec<_>>();
    assert_eq!(got_values, values, "radio values for {name}");

    let got_checked = radios
        .iter()
        .filter(|radio| radio.value().attr("checked").is_some())
        .map(|radio| radio.value().attr("value").unwrap_or_default())
        .collect::<Vec<_>>();
    assert_eq!(got_checked, vec![checked], "checked radio for {name}");
}

#[track_caller]
pub(crate) fn assert_form_submit_button_with_text(form: &ElementRef<'_>, text: &str) {
    let submit_button = form
        .select(&Selector::parse("button").unwrap())
        .next()
        .expect("No button found");

    assert_eq!(
        submit_button.value().attr("type").unwrap_or_default(),
        "submit",
        "want submit button with type=\"submit\""
    );
    let got_text = submit_button.text().collect::<Vec<_>>().join("");
    let got_text = got_text.trim();
    assert_eq!(text, got_text);
}
