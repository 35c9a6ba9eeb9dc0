use super::form_view::AuthFormViewModel;
use crate::shared::components::ui::Input;
use contracts::system::auth::FormField;
use contracts::usecases::u501_submit_form::on_field_input;
use leptos::prelude::*;

/// Input bound to one login/signup field of `vm`.
///
/// Editing the value clears the field's error immediately.
#[component]
pub fn AuthField(
    vm: AuthFormViewModel,
    field: FormField,
    #[prop(into)] label: String,
    #[prop(optional, into)] input_type: MaybeProp<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] autocomplete: MaybeProp<String>,
) -> impl IntoView {
    let model = vm.field(field);
    let on_input = Callback::new(move |value: String| {
        let mut vm = vm;
        vm.set_value(field, value);
        on_field_input(&mut vm, field);
    });

    view! {
        <Input
            id={field.dom_id()}
            label=label
            value={model.value}
            error={model.error}
            on_input=on_input
            input_type=input_type
            placeholder=placeholder
            autocomplete=autocomplete
        />
    }
}
