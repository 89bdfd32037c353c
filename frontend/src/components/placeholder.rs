use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlaceholderProps {
    pub message: AttrValue,
}

/// Single centered message shown instead of the month tables.
#[function_component(Placeholder)]
pub fn placeholder(props: &PlaceholderProps) -> Html {
    html! {
        <div class="table-wrapper">
            <table role="presentation">
                <tbody>
                    <tr>
                        <td style="padding: 1.5rem; text-align: center; font-size: 1rem;">
                            { props.message.clone() }
                        </td>
                    </tr>
                </tbody>
            </table>
        </div>
    }
}
