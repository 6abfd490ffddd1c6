use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NamedOption {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LabeledOption {
    pub id: i64,
    pub label: String,
}

// 表单下拉框数据：专业按名称、学年按 ID、学期按序号排序
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DropdownResponse {
    pub branches: Vec<NamedOption>,
    pub years: Vec<LabeledOption>,
    pub semesters: Vec<LabeledOption>,
}
