use std::fmt::Display;
use std::hash::Hash;

use crate::{ShortestPaths, Weight};

pub trait LatexDisplay {
    fn to_latex(&self) -> String;
}

pub fn escape_latex(s: &str) -> String {
    s.replace('\\', "\\textbackslash{}")
        .replace('%', "\\%")
        .replace('&', "\\&")
        .replace('#', "\\#")
        .replace('_', "\\_")
        .replace('{', "\\{")
        .replace('}', "\\}")
        .replace('$', "\\$")
}

impl<K, W> LatexDisplay for ShortestPaths<K, W>
where
    K: Clone + Eq + Hash + Display,
    W: Weight,
{
    fn to_latex(&self) -> String {
        let mut result = String::new();
        result.push_str("\\begin{tabular}{|c|c|c|}\n\\hline\n");
        result.push_str("Node & Distance & Predecessor \\\\\n\\hline\n");
        for (node, distance, predecessor) in self.iter() {
            let distance_str = match distance {
                Some(d) => d.to_string(),
                None => "$\\infty$".to_string(),
            };
            let pred_str = match predecessor {
                Some(p) => escape_latex(&p.to_string()),
                None => "undef".to_string(),
            };
            result.push_str(&format!(
                "{} & {} & {} \\\\\n",
                escape_latex(&node.to_string()),
                distance_str,
                pred_str
            ));
        }
        result.push_str("\\hline\n\\end{tabular}\n");
        result
    }
}
