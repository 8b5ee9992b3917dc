/// Category choices offered by the bill form until categories can be managed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryOption {
    pub id: i32,
    pub name: &'static str,
}

pub const CATEGORY_OPTIONS: [CategoryOption; 2] = [
    CategoryOption {
        id: 0,
        name: "Choose a category",
    },
    CategoryOption { id: 1, name: "Test" },
];
