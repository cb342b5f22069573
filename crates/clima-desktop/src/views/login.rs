//! Login screen - static layout, submission is a no-op

use dioxus::prelude::*;

use crate::theme::PALETTE;

/// Login screen component
#[component]
pub fn Login() -> Element {
    let input_style = format!(
        "border: 3px solid {accent};
         border-radius: 7px;
         padding: 10px;
         margin: 10px 0;
         width: 100%;
         box-sizing: border-box;
         font-size: 15px;
         background: transparent;
         color: {accent};
         outline: none;",
        accent = PALETTE.login_accent
    );

    rsx! {
        div {
            class: "login-screen",
            style: "
                display: flex;
                flex-direction: column;
                justify-content: center;
                min-height: 100vh;
                padding: 0 20px;
                background: {PALETTE.login_bg};
            ",

            div {
                style: "
                    font-size: 30px;
                    font-weight: bold;
                    align-self: center;
                    color: {PALETTE.login_accent};
                ",
                "PODAI"
            }

            label {
                style: "font-size: 15px; font-weight: 700; color: {PALETTE.login_accent};",
                "Usuario"
            }
            input {
                r#type: "text",
                placeholder: "Usuario",
                style: "{input_style}",
            }

            label {
                style: "font-size: 15px; font-weight: 700; color: {PALETTE.login_accent};",
                "Password"
            }
            input {
                r#type: "password",
                placeholder: "Password",
                style: "{input_style}",
            }

            button {
                style: "
                    background: {PALETTE.login_accent};
                    color: {PALETTE.login_bg};
                    border: none;
                    border-radius: 7px;
                    padding: 10px;
                    margin-top: 10px;
                    font-size: 15px;
                    font-weight: 700;
                    cursor: pointer;
                ",
                "LOGIN"
            }
        }
    }
}
