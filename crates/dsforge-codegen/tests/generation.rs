//! Generated output across the whole catalog and every strategy.

use std::collections::BTreeSet;
use std::fs;

use dsforge_codegen::{
    catalog, export_files, generate, generate_all, generate_code, referenced_variables,
    ComponentKind, GeneratedFile, Language, Strategy,
};
use dsforge_tokens::{default_dark_tokens, default_tokens, flatten, set_token_value, TokenTree, TokenType};
use tempfile::TempDir;

fn file_names(component: &str, strategy: &str) -> Vec<String> {
    generate_code(component, &default_tokens(), strategy)
        .into_iter()
        .map(|file| file.file_name)
        .collect()
}

#[test]
fn web_component_file_names() {
    assert_eq!(
        file_names("button", "web-component"),
        ["ds-button.ts", "ds-button.react.ts", "ds-button.angular.ts"]
    );
}

#[test]
fn native_react_file_names() {
    assert_eq!(
        file_names("navbar", "native-react"),
        ["Navbar.tsx", "Navbar.module.css", "index.ts"]
    );
}

#[test]
fn native_angular_file_names() {
    assert_eq!(
        file_names("checkbox", "native-angular"),
        ["checkbox.component.ts", "checkbox.component.css"]
    );
}

#[test]
fn every_component_generates_under_every_strategy() {
    let tokens = default_tokens();
    for strategy in Strategy::ALL {
        for definition in catalog() {
            let files = generate_code(definition.id, &tokens, strategy.as_str());
            assert!(!files.is_empty(), "{} / {}", definition.id, strategy);
            for file in &files {
                assert!(!file.content.trim().is_empty(), "{} is empty", file.file_name);
                assert!(!file.description.is_empty());
            }
        }
    }
}

#[test]
fn languages_follow_extensions() {
    let tokens = default_tokens();
    for strategy in Strategy::ALL {
        for (_, files) in generate_all(&tokens, strategy).unwrap() {
            for file in files {
                let expected = if file.file_name.ends_with(".css") {
                    Language::Css
                } else {
                    Language::Ts
                };
                assert_eq!(file.language, expected, "{}", file.file_name);
            }
        }
    }
}

#[test]
fn output_only_references_defined_variables() {
    let defined = flatten(&default_tokens());
    for strategy in Strategy::ALL {
        for (kind, files) in generate_all(&default_tokens(), strategy).unwrap() {
            for file in files {
                for name in referenced_variables(&file.content) {
                    assert!(
                        defined.contains_key(name),
                        "{} ({}) references undefined {}",
                        file.file_name,
                        kind,
                        name
                    );
                }
            }
        }
    }
}

#[test]
fn token_values_never_appear_in_output() {
    let tokens = default_tokens();
    let colors: BTreeSet<&str> = tokens
        .tokens()
        .into_iter()
        .filter(|(_, token)| token.token_type == TokenType::Color && !token.is_alias())
        .map(|(_, token)| token.value.as_str())
        .collect();
    assert!(colors.contains("#3b82f6"));

    for strategy in Strategy::ALL {
        for (_, files) in generate_all(&tokens, strategy).unwrap() {
            for file in files {
                for color in &colors {
                    assert!(
                        !file.content.contains(color),
                        "{} inlines {}",
                        file.file_name,
                        color
                    );
                }
            }
        }
    }
}

#[test]
fn output_does_not_depend_on_token_values() {
    let edited = set_token_value(&default_tokens(), "color.primary.500", "#ff0000");
    for strategy in Strategy::ALL {
        for kind in ComponentKind::ALL {
            let light = generate(kind, &default_tokens(), strategy).unwrap();
            assert_eq!(light, generate(kind, &default_dark_tokens(), strategy).unwrap());
            assert_eq!(light, generate(kind, &edited, strategy).unwrap());
            assert_eq!(light, generate(kind, &TokenTree::new(), strategy).unwrap());
        }
    }
}

#[test]
fn custom_element_registers_its_tag() {
    let files = generate(ComponentKind::Switch, &default_tokens(), Strategy::WebComponent).unwrap();
    let element = &files[0].content;
    assert!(element.contains("export class DsSwitch extends HTMLElement"));
    assert!(element.contains("customElements.define('ds-switch', DsSwitch);"));
    assert!(element.contains("'ds-checked-change'"));
    assert!(element.contains("attachShadow({ mode: 'open' })"));

    let react = &files[1].content;
    assert!(react.contains("onCheckedChange"));
    assert!(react.contains("import { DsSwitch } from './ds-switch';"));

    let angular = &files[2].content;
    assert!(angular.contains("selector: 'ds-switch'"));
}

fn file<'a>(files: &'a [GeneratedFile], name: &str) -> &'a GeneratedFile {
    files
        .iter()
        .find(|file| file.file_name == name)
        .unwrap_or_else(|| panic!("no {} in output", name))
}

#[test]
fn button_as_web_component() {
    let files = generate_code("button", &default_tokens(), "web-component");
    let element = file(&files, "ds-button.ts");
    assert!(element.content.contains("customElements.define('ds-button', DsButton);"));

    let react = file(&files, "ds-button.react.ts");
    assert!(react.content.contains("import { DsButton } from './ds-button';"));
}

#[test]
fn button_as_native_react() {
    let files = generate_code("button", &default_tokens(), "native-react");
    let component = file(&files, "Button.tsx");
    assert!(component.content.contains("export function Button("));
    assert!(component.content.contains("export default Button;"));
    file(&files, "Button.module.css");
}

#[test]
fn button_as_native_angular() {
    let files = generate_code("button", &default_tokens(), "native-angular");
    let component = file(&files, "button.component.ts");
    assert!(component.content.contains("@Component({"));
    assert!(component.content.contains("selector: 'app-button'"));
    assert!(!component.content.contains("selector: 'ds-button'"));
    file(&files, "button.component.css");
}

#[test]
fn angular_selectors_do_not_collide() {
    let native = generate_code("switch", &default_tokens(), "native-angular");
    let wrapped = generate_code("switch", &default_tokens(), "web-component");
    assert!(file(&native, "switch.component.ts").content.contains("selector: 'app-switch'"));
    assert!(file(&wrapped, "ds-switch.angular.ts").content.contains("selector: 'ds-switch'"));
}

#[test]
fn angular_templates_keep_their_interpolation() {
    let files = generate(ComponentKind::Badge, &default_tokens(), Strategy::NativeAngular).unwrap();
    let component = &files[0].content;
    assert!(component.contains("standalone: true"));
    assert!(component.contains("selector: 'app-badge'"));
    assert!(component.contains("styleUrls: ['./badge.component.css']"));
    assert!(component.contains("{{"), "Angular interpolation was rendered away");
}

#[test]
fn react_component_uses_css_module() {
    let files = generate(ComponentKind::Card, &default_tokens(), Strategy::NativeReact).unwrap();
    assert!(files[0].content.contains("import styles from './Card.module.css';"));
    assert!(files[0].content.contains("export default Card;"));
    assert!(files[1].content.contains(".card"));
    assert_eq!(
        files[2].content,
        "export { Card, default } from './Card';\nexport type { CardProps } from './Card';\n"
    );
}

#[test]
fn export_writes_a_component_directory() {
    let dir = TempDir::new().unwrap();
    let files = generate(ComponentKind::Modal, &default_tokens(), Strategy::NativeReact).unwrap();

    let written = export_files(&files, dir.path()).unwrap();
    assert_eq!(written.len(), 3);
    for file in &files {
        let on_disk = fs::read_to_string(dir.path().join(&file.file_name)).unwrap();
        assert_eq!(on_disk, file.content);
    }
}
