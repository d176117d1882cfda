use breach_common::schema::MessageRoot;
use breach_common::target::Target;
use breach_schemas::{ArasakaMessageRoot, BiotechnicaMessageRoot, MilitechMessageRoot};
use colored::*;

use crate::mprint;
use crate::terminal::format::Detail;
use crate::terminal::print;

pub fn targets(only: Option<Target>) {
    for (idx, target) in selected(only).into_iter().enumerate() {
        if idx > 0 {
            mprint!();
        }
        match target {
            Target::Arasaka => print_schema::<ArasakaMessageRoot>(idx),
            Target::Militech => print_schema::<MilitechMessageRoot>(idx),
            Target::Biotechnica => print_schema::<BiotechnicaMessageRoot>(idx),
        }
    }
}

fn selected(only: Option<Target>) -> Vec<Target> {
    Target::ALL
        .into_iter()
        .filter(|target| only.is_none_or(|wanted| wanted == *target))
        .collect()
}

fn print_schema<R: MessageRoot>(idx: usize) {
    print::entry_head(idx, R::TARGET.name());
    let details: Vec<Detail> = vec![
        (String::from("Root"), short_type_name::<R>().normal()),
        (String::from("Entry"), short_type_name::<R::Entry>().normal()),
        (String::from("Client"), format!("{}IceBreaker", R::TARGET).normal()),
    ];
    print::detail_tree(&details);
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use breach_schemas::MilitechIceProcessList;

    #[test]
    fn short_type_name_drops_the_module_path() {
        assert_eq!(short_type_name::<MilitechMessageRoot>(), "MilitechMessageRoot");
        assert_eq!(short_type_name::<MilitechIceProcessList>(), "MilitechIceProcessList");
    }

    #[test]
    fn every_target_is_listed_unless_one_is_chosen() {
        assert_eq!(selected(None), Target::ALL);
        assert_eq!(selected(Some(Target::Biotechnica)), [Target::Biotechnica]);
    }
}
